//! Group registry with the selection/expiration algorithm.

use crate::agreement::{FormationAgreement, GroupState};
use crate::config::RegistryConfig;
use parking_lot::Mutex;
use pharos_core::{BlockHeight, EntropySource, MemberIndex, PharosError, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};
use uuid::Uuid;

/// Result of a successful selection: the agreement id and its membership.
///
/// The requesting collaborator is solely responsible for restricting
/// subsequent work to the listed members; the registry enforces nothing
/// downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectedGroup {
    /// Agreement id of the selected group
    pub id: Uuid,
    /// Membership list handed to the work contract
    pub members: Vec<MemberIndex>,
}

/// Read-only registry counters for monitoring. Never an input to selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// Number of active groups
    pub active_groups: usize,
    /// Number of retired groups still retained
    pub expired_groups: usize,
    /// Configured safety floor
    pub active_groups_threshold: usize,
}

/// The three collections the registry guards as one atomic unit.
///
/// The counter exists separately from the list because group counts are
/// read and compared on hot paths without traversing the list; it is kept
/// in lockstep under the single mutex scope.
#[derive(Debug, Default)]
struct RegistryState {
    /// Active agreements, insertion order = formation order
    active: Vec<FormationAgreement>,
    /// Retired agreements, unordered; prunable at any time
    expired: Vec<FormationAgreement>,
    active_count: usize,
}

/// Process-wide bookkeeping of all formed groups.
pub struct GroupRegistry {
    config: RegistryConfig,
    entropy: Arc<dyn EntropySource>,
    state: Mutex<RegistryState>,
}

impl GroupRegistry {
    /// Create a registry with the given configuration and selection entropy.
    pub fn new(config: RegistryConfig, entropy: Arc<dyn EntropySource>) -> Self {
        Self {
            config,
            entropy,
            state: Mutex::new(RegistryState::default()),
        }
    }

    /// Register a freshly formed group.
    ///
    /// The agreement enters the active list immediately, stamped with the
    /// configured lifetime.
    pub fn register_group(&self, members: Vec<MemberIndex>, now: BlockHeight) -> Result<Uuid> {
        if members.is_empty() {
            return Err(PharosError::invalid(
                "Cannot register a group with no members",
            ));
        }

        let agreement =
            FormationAgreement::new(members, now, self.config.group_lifetime_blocks);
        let id = agreement.id;

        let mut state = self.state.lock();
        state.active.push(agreement);
        state.active_count += 1;
        info!(group = %id, registered_at = %now, active = state.active_count, "registered group");
        Ok(id)
    }

    /// Select a group to serve a work request.
    ///
    /// Picks a uniformly random active agreement. Above the configured
    /// threshold, an expired candidate is retired on the spot and the draw
    /// repeats; at or below it, the candidate is returned as-is with no
    /// expiration check, so the pool never shrinks past the safety floor.
    /// The whole retry loop runs under one lock acquisition and performs no
    /// external I/O.
    ///
    /// Returns [`PharosError::Unavailable`] when no active group remains.
    pub fn select_group(&self, now: BlockHeight) -> Result<SelectedGroup> {
        let mut state = self.state.lock();

        loop {
            if state.active_count != state.active.len() {
                // Unreachable while the single-lock discipline holds; not
                // recoverable in place if it ever trips.
                return Err(PharosError::internal(
                    "Active group counter diverged from the active list",
                ));
            }
            if state.active_count == 0 {
                return Err(PharosError::unavailable("No active groups registered"));
            }

            let candidate_index = self.entropy.pick(state.active_count);

            if state.active_count <= self.config.active_groups_threshold {
                // At the safety floor staleness is preferable to starving
                // the network, so the candidate is returned unchecked.
                let agreement = &state.active[candidate_index];
                debug!(group = %agreement.id, active = state.active_count, "selected group at safety floor");
                return Ok(SelectedGroup {
                    id: agreement.id,
                    members: agreement.members.clone(),
                });
            }

            if state.active[candidate_index].is_expired(now) {
                let mut agreement = state.active.remove(candidate_index);
                agreement.state = GroupState::Expired;
                state.active_count -= 1;
                info!(
                    group = %agreement.id,
                    registered_at = %agreement.registered_at,
                    %now,
                    active = state.active_count,
                    "retired expired group"
                );
                state.expired.push(agreement);
                continue;
            }

            let agreement = &state.active[candidate_index];
            debug!(group = %agreement.id, "selected group");
            return Ok(SelectedGroup {
                id: agreement.id,
                members: agreement.members.clone(),
            });
        }
    }

    /// Current number of active groups.
    pub fn active_group_count(&self) -> usize {
        self.state.lock().active_count
    }

    /// Drop retired agreements beyond `max_retained`, oldest first.
    ///
    /// Purely a memory concern; selection is unaffected. Returns the number
    /// of records dropped.
    pub fn prune_expired(&self, max_retained: usize) -> usize {
        let mut state = self.state.lock();
        let excess = state.expired.len().saturating_sub(max_retained);
        if excess > 0 {
            state.expired.drain(0..excess);
            debug!(pruned = excess, retained = state.expired.len(), "pruned expired groups");
        }
        excess
    }

    /// Read-only counters for the observability surface.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.state.lock();
        RegistrySnapshot {
            active_groups: state.active_count,
            expired_groups: state.expired.len(),
            active_groups_threshold: self.config.active_groups_threshold,
        }
    }
}
