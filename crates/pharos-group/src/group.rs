//! Durable per-formation group record.

use crate::message_filter::MessageFiltering;
use parking_lot::RwLock;
use pharos_core::{member::member_indices, MemberIndex, PharosError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::warn;

/// Fault sets accumulated over the lifetime of one group.
///
/// Both sets only ever grow. Inactivity and disqualification are recorded
/// independently; eligibility treats them the same way (either one excludes
/// a member from the operating view).
#[derive(Debug, Default)]
struct FaultSets {
    inactive: BTreeSet<MemberIndex>,
    disqualified: BTreeSet<MemberIndex>,
}

/// One formed group: fixed membership plus growing fault sets.
///
/// `Group` is a cheap shared handle. The membership list is immutable after
/// formation; only the fault sets mutate, behind a read-write lock so that
/// message filtering can read concurrently with the owning phase's writes.
#[derive(Debug, Clone)]
pub struct Group {
    members: Arc<Vec<MemberIndex>>,
    faults: Arc<RwLock<FaultSets>>,
}

impl Group {
    /// Create a group from a finalized membership list.
    ///
    /// The list must be non-empty and duplicate-free; it is never mutated
    /// afterwards.
    pub fn new(members: Vec<MemberIndex>) -> Result<Self> {
        if members.is_empty() {
            return Err(PharosError::invalid("Group requires at least one member"));
        }

        let mut seen = BTreeSet::new();
        for member in &members {
            if !seen.insert(*member) {
                return Err(PharosError::invalid(format!(
                    "Duplicate member index {member} in group membership"
                )));
            }
        }

        Ok(Self {
            members: Arc::new(members),
            faults: Arc::new(RwLock::new(FaultSets::default())),
        })
    }

    /// Create a group with the dense membership `1..=size`.
    pub fn of_size(size: u32) -> Result<Self> {
        Self::new(member_indices(size))
    }

    /// Fixed membership list, in formation order.
    pub fn members(&self) -> &[MemberIndex] {
        &self.members
    }

    /// Number of members fixed at formation.
    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Whether the index belongs to this group at all.
    pub fn contains(&self, member: MemberIndex) -> bool {
        self.members.contains(&member)
    }

    /// Record a member as unresponsive.
    ///
    /// Non-member indices are ignored: untrusted input must not be able to
    /// disturb the fault sets.
    pub fn mark_member_inactive(&self, member: MemberIndex) {
        if !self.contains(member) {
            warn!(%member, "ignoring inactivity mark for non-member index");
            return;
        }
        self.faults.write().inactive.insert(member);
    }

    /// Record a member as a proven protocol violator.
    ///
    /// Non-member indices are ignored, as with [`Self::mark_member_inactive`].
    pub fn mark_member_disqualified(&self, member: MemberIndex) {
        if !self.contains(member) {
            warn!(%member, "ignoring disqualification mark for non-member index");
            return;
        }
        self.faults.write().disqualified.insert(member);
    }

    /// Whether the member has been marked unresponsive in any phase so far.
    pub fn is_inactive(&self, member: MemberIndex) -> bool {
        self.faults.read().inactive.contains(&member)
    }

    /// Whether the member has been disqualified in any phase so far.
    pub fn is_disqualified(&self, member: MemberIndex) -> bool {
        self.faults.read().disqualified.contains(&member)
    }

    /// Whether the member is still eligible to participate.
    pub fn is_operating(&self, member: MemberIndex) -> bool {
        if !self.contains(member) {
            return false;
        }
        let faults = self.faults.read();
        !faults.inactive.contains(&member) && !faults.disqualified.contains(&member)
    }

    /// Members still eligible to participate, in formation order.
    ///
    /// Derived on demand from the membership list and the current fault
    /// sets; never stored.
    pub fn operating_members(&self) -> Vec<MemberIndex> {
        let faults = self.faults.read();
        self.members
            .iter()
            .copied()
            .filter(|m| !faults.inactive.contains(m) && !faults.disqualified.contains(m))
            .collect()
    }

    /// Snapshot of the inactive set.
    pub fn inactive_members(&self) -> BTreeSet<MemberIndex> {
        self.faults.read().inactive.clone()
    }

    /// Snapshot of the disqualified set.
    pub fn disqualified_members(&self) -> BTreeSet<MemberIndex> {
        self.faults.read().disqualified.clone()
    }

    /// Fault-set sizes for monitoring. Never an input to protocol decisions.
    pub fn fault_summary(&self) -> FaultSummary {
        let faults = self.faults.read();
        FaultSummary {
            inactive: faults.inactive.len(),
            disqualified: faults.disqualified.len(),
        }
    }
}

impl MessageFiltering for Group {
    fn is_sender_accepted(&self, sender: MemberIndex) -> bool {
        self.is_operating(sender)
    }
}

/// Read-only fault-set sizes exposed for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaultSummary {
    /// Number of members marked unresponsive so far
    pub inactive: usize,
    /// Number of members disqualified so far
    pub disqualified: usize,
}
