#![forbid(unsafe_code)]
//! # Pharos Core
//!
//! Foundational value types and boundary interfaces for a Pharos beacon
//! node. This crate owns only the vocabulary shared by the rest of the
//! workspace: protocol-level member identification, logical block time, the
//! unified error type, and the effect traits behind which the chain, the
//! authenticated transport, and the selection randomness source live.
//!
//! No cryptography and no networking is implemented here; those are
//! collaborators reached through the traits in [`effects`].

/// Unified error handling
pub mod errors;

/// Boundary effect interfaces (no implementations besides entropy handlers)
pub mod effects;

/// Transport-level participant identity
pub mod identity;

/// Protocol-level member identification
pub mod member;

/// Logical block time
pub mod time;

pub use effects::{BlockTimeEffects, BroadcastChannel, ChaChaEntropy, EntropySource, MessageHandler};
pub use errors::{PharosError, Result};
pub use identity::NetworkIdentity;
pub use member::MemberIndex;
pub use time::BlockHeight;
