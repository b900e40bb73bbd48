//! Message filtering capability and per-phase fault filters.
//!
//! Filtering is a pure read of the group's current fault state. The two
//! filter types accumulate per-phase observations with opposite default
//! polarity: a member is presumed inactive unless positively observed, but
//! is disqualified only on positive evidence. Each filter instance lives for
//! exactly one phase; flushing consumes it, so a filter can neither flush
//! twice nor outlive its phase.

use crate::group::Group;
use pharos_core::MemberIndex;
use std::collections::BTreeSet;

/// Capability to gate incoming protocol messages by sender eligibility.
///
/// Implemented by [`Group`]; protocol logic depends on this one-method
/// contract rather than the full group type, so test doubles can implement
/// it directly.
pub trait MessageFiltering {
    /// Whether a message from the given sender should be processed at all.
    ///
    /// True only for properly operating group members. Unknown senders are
    /// rejected, never an error: untrusted input must not be able to
    /// disrupt protocol execution.
    fn is_sender_accepted(&self, sender: MemberIndex) -> bool;
}

/// Common surface of all DKG protocol messages.
pub trait ProtocolMessage {
    /// Protocol-level identifier of the message sender.
    fn sender_id(&self) -> MemberIndex;
}

/// Whether the given message originated from the current member itself.
///
/// Protocol logic uses this to avoid acting on its own broadcast.
pub fn is_message_from_self(member: MemberIndex, message: &impl ProtocolMessage) -> bool {
    message.sender_id() == member
}

/// Whether the sender of the given message is accepted by the filter.
pub fn is_sender_accepted(
    filter: &impl MessageFiltering,
    message: &impl ProtocolMessage,
) -> bool {
    filter.is_sender_accepted(message.sender_id())
}

/// Per-phase accumulator of positive activity observations.
///
/// Members of the operating view that were not observed by the end of the
/// phase are flushed to the group as inactive. The observing member is
/// always exempt from its own filter.
#[derive(Debug)]
pub struct InactiveMemberFilter {
    self_member_id: MemberIndex,
    group: Group,
    phase_active_members: BTreeSet<MemberIndex>,
}

impl InactiveMemberFilter {
    /// Create a filter for one phase, owned by the observing member.
    pub fn new(self_member_id: MemberIndex, group: &Group) -> Self {
        Self {
            self_member_id,
            group: group.clone(),
            phase_active_members: BTreeSet::new(),
        }
    }

    /// Record a positive observation of the member this phase.
    ///
    /// Idempotent. Membership is not validated here; callers are expected
    /// to pass indices of group members, and the group ignores strays at
    /// flush time anyway.
    pub fn mark_member_as_active(&mut self, member: MemberIndex) {
        self.phase_active_members.insert(member);
    }

    /// Flush every unobserved operating member to the group as inactive.
    ///
    /// Consumes the filter: a flush is final for its phase, and the group
    /// mutations are observable as soon as this returns.
    pub fn flush_inactive_members(self) {
        let is_active = |member: MemberIndex| {
            member == self.self_member_id || self.phase_active_members.contains(&member)
        };

        for member in self.group.operating_members() {
            if !is_active(member) {
                self.group.mark_member_inactive(member);
            }
        }
    }
}

/// Per-phase accumulator of disqualification evidence.
///
/// Only members with a positive observation are flushed; the observing
/// member can never disqualify itself.
#[derive(Debug)]
pub struct DisqualifiedMemberFilter {
    self_member_id: MemberIndex,
    group: Group,
    phase_disqualified_members: BTreeSet<MemberIndex>,
}

impl DisqualifiedMemberFilter {
    /// Create a filter for one phase, owned by the observing member.
    pub fn new(self_member_id: MemberIndex, group: &Group) -> Self {
        Self {
            self_member_id,
            group: group.clone(),
            phase_disqualified_members: BTreeSet::new(),
        }
    }

    /// Record protocol-level evidence against the member this phase.
    ///
    /// Idempotent; membership is not validated here.
    pub fn mark_member_as_disqualified(&mut self, member: MemberIndex) {
        self.phase_disqualified_members.insert(member);
    }

    /// Flush every member with evidence against it to the group.
    ///
    /// Members already disqualified are skipped; members merely inactive
    /// are not. Evidence of cheating is recorded even against a silent
    /// member, keeping the two fault sets independently queryable.
    pub fn flush_disqualified_members(self) {
        let is_disqualified = |member: MemberIndex| {
            member != self.self_member_id && self.phase_disqualified_members.contains(&member)
        };

        for member in self.group.members().iter().copied() {
            if !self.group.is_disqualified(member) && is_disqualified(member) {
                self.group.mark_member_disqualified(member);
            }
        }
    }
}
