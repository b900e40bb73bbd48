#![forbid(unsafe_code)]
//! # Pharos Group
//!
//! Per-formation fault bookkeeping for the DKG protocol. Each node runs one
//! [`Group`] record per group it belongs to: the fixed membership plus the
//! two fault sets (inactive, disqualified) that accumulate across protocol
//! phases. Incoming protocol messages are gated by the [`MessageFiltering`]
//! capability, and each phase owns a pair of short-lived filters that flush
//! their findings into the group exactly once.
//!
//! Fault polarity differs by kind: absence of a message implies inactivity,
//! but disqualification requires positive protocol-level evidence. The two
//! sets stay independently queryable; a member may end up in both.

/// Durable per-formation group record
pub mod group;

/// Message filtering capability and per-phase fault filters
pub mod message_filter;

/// Single-phase execution driver
pub mod phase;

pub use group::{FaultSummary, Group};
pub use message_filter::{
    is_message_from_self, is_sender_accepted, DisqualifiedMemberFilter, InactiveMemberFilter,
    MessageFiltering, ProtocolMessage,
};
pub use phase::DkgPhase;
