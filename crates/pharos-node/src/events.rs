//! Chain-side events consumed by the node.

use pharos_core::{MemberIndex, Result};
use pharos_registry::SelectedGroup;
use tokio::sync::oneshot;

/// Events delivered to the orchestrator loop.
#[derive(Debug)]
pub enum NodeEvent {
    /// A group formation completed with the finalized membership list.
    GroupFormed {
        /// Membership fixed at formation
        members: Vec<MemberIndex>,
    },

    /// New work was requested; a group must be selected to serve it.
    ///
    /// The selection outcome, a membership list or an explicit
    /// unavailability, goes back to the requester, which alone authorizes
    /// the listed members to act.
    WorkRequested {
        /// Reply channel for the selection outcome
        reply: oneshot::Sender<Result<SelectedGroup>>,
    },
}
