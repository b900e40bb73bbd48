//! Orchestrator event loop.

use crate::events::NodeEvent;
use pharos_core::{BlockTimeEffects, MemberIndex, Result};
use pharos_registry::{GroupRegistry, RegistrySnapshot, SelectedGroup};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One beacon node's orchestrator.
///
/// Holds the shared registry and the block-time oracle; every event handler
/// reads the oracle once and passes the observed height into the registry,
/// which itself performs no I/O.
pub struct Node {
    registry: Arc<GroupRegistry>,
    block_time: Arc<dyn BlockTimeEffects>,
}

impl Node {
    /// Create a node around a registry and a block-time oracle.
    pub fn new(registry: Arc<GroupRegistry>, block_time: Arc<dyn BlockTimeEffects>) -> Self {
        Self {
            registry,
            block_time,
        }
    }

    /// Run the event loop until shutdown is signalled or the event source
    /// closes.
    ///
    /// Cancellation abandons any in-flight handling; groups are left in
    /// their last flushed state and the registry is never torn.
    pub async fn run(
        &self,
        mut events: mpsc::Receiver<NodeEvent>,
        mut shutdown: watch::Receiver<bool>,
    ) {
        loop {
            tokio::select! {
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        info!("node shutting down");
                        break;
                    }
                }
                event = events.recv() => match event {
                    Some(event) => self.handle_event(event).await,
                    None => {
                        debug!("event source closed");
                        break;
                    }
                },
            }
        }
    }

    async fn handle_event(&self, event: NodeEvent) {
        match event {
            NodeEvent::GroupFormed { members } => {
                if let Err(error) = self.handle_group_formed(members).await {
                    warn!(%error, "failed to register formed group");
                }
            }
            NodeEvent::WorkRequested { reply } => {
                let result = self.handle_work_request().await;
                // A dropped requester is not the node's problem.
                let _ = reply.send(result);
            }
        }
    }

    /// Register a completed group formation with the registry.
    pub async fn handle_group_formed(&self, members: Vec<MemberIndex>) -> Result<Uuid> {
        let now = self.block_time.current_block().await?;
        self.registry.register_group(members, now)
    }

    /// Serve a work request by selecting a group.
    ///
    /// An [`pharos_core::PharosError::Unavailable`] outcome means the
    /// requesting workflow stalls and reports upward; it is not a node
    /// failure.
    pub async fn handle_work_request(&self) -> Result<SelectedGroup> {
        let now = self.block_time.current_block().await?;
        self.registry.select_group(now)
    }

    /// Registry counters for the observability surface.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }
}
