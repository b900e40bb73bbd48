#![forbid(unsafe_code)]
//! # Pharos Node
//!
//! Orchestration glue for one beacon node: consumes chain-side events
//! (group formations, work requests) and ties them to the group registry
//! and per-group protocol execution. Deliberately thin: the hard logic
//! lives in `pharos-group` and `pharos-registry`; this crate only reads the
//! block-time oracle, routes events, and maps transport identities to
//! group-local member indices.

/// Chain-side events consumed by the node
pub mod events;

/// Orchestrator event loop
pub mod node;

/// Transport identity to member index mapping
pub mod roster;

pub use events::NodeEvent;
pub use node::Node;
pub use roster::GroupRoster;
