//! Single-phase execution driver.
//!
//! One `DkgPhase` is created per protocol phase and owns that phase's pair
//! of fault filters, giving the executing phase exclusive write access while
//! message filtering reads the group concurrently. Completing the phase
//! consumes the driver and flushes both filters; dropping it without
//! completing abandons the phase with the group left in its last flushed
//! state.

use crate::group::Group;
use crate::message_filter::{
    is_message_from_self, DisqualifiedMemberFilter, InactiveMemberFilter, MessageFiltering,
    ProtocolMessage,
};
use pharos_core::MemberIndex;
use tracing::debug;

/// Driver for one DKG protocol phase, owned by the executing member.
#[derive(Debug)]
pub struct DkgPhase {
    self_member_id: MemberIndex,
    group: Group,
    inactive_filter: InactiveMemberFilter,
    disqualified_filter: DisqualifiedMemberFilter,
}

impl DkgPhase {
    /// Start a phase for the given group, observed by `self_member_id`.
    pub fn new(self_member_id: MemberIndex, group: &Group) -> Self {
        Self {
            self_member_id,
            group: group.clone(),
            inactive_filter: InactiveMemberFilter::new(self_member_id, group),
            disqualified_filter: DisqualifiedMemberFilter::new(self_member_id, group),
        }
    }

    /// Gate an incoming message for this phase.
    ///
    /// Returns true when the message should be processed by protocol logic.
    /// Accepting a message counts as a positive activity observation for its
    /// sender. Self-originated broadcasts and messages from non-operating
    /// senders are rejected without error.
    pub fn accept(&mut self, message: &impl ProtocolMessage) -> bool {
        let sender = message.sender_id();

        if is_message_from_self(self.self_member_id, message) {
            return false;
        }
        if !self.group.is_sender_accepted(sender) {
            debug!(%sender, "dropping message from non-operating sender");
            return false;
        }

        self.inactive_filter.mark_member_as_active(sender);
        true
    }

    /// Record protocol-level evidence that a member cheated this phase.
    ///
    /// The evidence itself (an invalid share, a failed commitment check) is
    /// judged by protocol logic; the driver only books the verdict.
    pub fn report_misbehavior(&mut self, member: MemberIndex) {
        debug!(%member, "recording disqualification evidence");
        self.disqualified_filter.mark_member_as_disqualified(member);
    }

    /// The group this phase operates on.
    pub fn group(&self) -> &Group {
        &self.group
    }

    /// Finish the phase, flushing both filters into the group.
    ///
    /// Inactivity findings land first, disqualification evidence second;
    /// the two are additive, so a silent cheater ends up in both sets.
    pub fn complete(self) {
        self.inactive_filter.flush_inactive_members();
        self.disqualified_filter.flush_disqualified_members();
    }
}
