//! Formation agreements and their lifecycle state.

use pharos_core::{BlockHeight, MemberIndex};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle state of a formed group. The transition is one-way and
/// terminal: a group never becomes active again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupState {
    /// Eligible to be assigned new work
    Active,
    /// Retired by the expiration algorithm
    Expired,
}

/// Network-level record of one formed group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationAgreement {
    /// Unique identifier assigned at registration
    pub id: Uuid,
    /// Finalized membership list, identical to the group's own
    pub members: Vec<MemberIndex>,
    /// Logical time at formation
    pub registered_at: BlockHeight,
    /// Blocks after registration until the group is eligible for expiry
    pub timeout: u64,
    /// Current lifecycle state, always matching the list holding the record
    pub state: GroupState,
}

impl FormationAgreement {
    /// Create a fresh agreement in the active state.
    pub fn new(members: Vec<MemberIndex>, registered_at: BlockHeight, timeout: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            members,
            registered_at,
            timeout,
            state: GroupState::Active,
        }
    }

    /// Whether the group's lifetime has elapsed at the given height.
    pub fn is_expired(&self, now: BlockHeight) -> bool {
        now > self.registered_at.saturating_add(self.timeout)
    }
}
