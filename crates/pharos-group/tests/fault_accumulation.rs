//! Multi-phase fault accumulation integration tests.

use pharos_core::MemberIndex;
use pharos_group::{
    DisqualifiedMemberFilter, Group, InactiveMemberFilter, MessageFiltering, ProtocolMessage,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

fn member(index: u32) -> MemberIndex {
    MemberIndex::new(index).unwrap()
}

struct SharePayload {
    sender: MemberIndex,
}

impl ProtocolMessage for SharePayload {
    fn sender_id(&self) -> MemberIndex {
        self.sender
    }
}

// Group of five; member 3 stays silent in phase one.
#[test]
fn test_silent_member_becomes_inactive() {
    let group = Group::of_size(5).unwrap();

    let mut filter = InactiveMemberFilter::new(member(1), &group);
    for sender in [2, 4, 5] {
        let message = SharePayload {
            sender: member(sender),
        };
        assert!(pharos_group::is_sender_accepted(&group, &message));
        filter.mark_member_as_active(message.sender_id());
    }
    filter.flush_inactive_members();

    let expected: BTreeSet<_> = [member(3)].into();
    assert_eq!(group.inactive_members(), expected);
    assert_eq!(group.operating_members().len(), 4);
}

// Phase two of the same run: the silent member now produces a provably
// invalid contribution and is disqualified on top of being inactive.
#[test]
fn test_inactive_member_later_disqualified() {
    let group = Group::of_size(5).unwrap();
    group.mark_member_inactive(member(3));

    let mut filter = DisqualifiedMemberFilter::new(member(1), &group);
    filter.mark_member_as_disqualified(member(3));
    filter.flush_disqualified_members();

    let expected: BTreeSet<_> = [member(3)].into();
    assert_eq!(group.disqualified_members(), expected);
    assert!(group.is_inactive(member(3)));
    assert!(!group.operating_members().contains(&member(3)));
}

#[test]
fn test_unknown_sender_rejected_without_mutation() {
    let group = Group::of_size(5).unwrap();
    let stranger = SharePayload { sender: member(77) };

    assert!(!pharos_group::is_sender_accepted(&group, &stranger));
    assert!(group.inactive_members().is_empty());
    assert!(group.disqualified_members().is_empty());
    assert_eq!(group.operating_members().len(), 5);
}

#[test]
fn test_observer_with_zero_marks_never_flags_itself() {
    for size in 1..=6u32 {
        let group = Group::of_size(size).unwrap();
        for observer in group.members().to_vec() {
            let filter = InactiveMemberFilter::new(observer, &group);
            filter.flush_inactive_members();
            assert!(!group.inactive_members().contains(&observer));
        }
    }
}

proptest! {
    // Fault sets only ever grow across successive flushes, and the
    // operating view always equals members minus both fault sets.
    #[test]
    fn prop_fault_sets_grow_monotonically(
        size in 2u32..10,
        phases in proptest::collection::vec(
            (proptest::collection::btree_set(1u32..10, 0..8),
             proptest::collection::btree_set(1u32..10, 0..4)),
            1..5,
        ),
    ) {
        let group = Group::of_size(size).unwrap();
        let observer = member(1);
        let mut last_inactive = 0;
        let mut last_disqualified = 0;

        for (active_marks, disqualified_marks) in phases {
            let mut inactive_filter = InactiveMemberFilter::new(observer, &group);
            for index in active_marks {
                inactive_filter.mark_member_as_active(member(index));
            }
            let mut disqualified_filter = DisqualifiedMemberFilter::new(observer, &group);
            for index in disqualified_marks {
                disqualified_filter.mark_member_as_disqualified(member(index));
            }

            inactive_filter.flush_inactive_members();
            disqualified_filter.flush_disqualified_members();

            let summary = group.fault_summary();
            prop_assert!(summary.inactive >= last_inactive);
            prop_assert!(summary.disqualified >= last_disqualified);
            last_inactive = summary.inactive;
            last_disqualified = summary.disqualified;

            let inactive = group.inactive_members();
            let disqualified = group.disqualified_members();
            let operating = group.operating_members();
            for m in group.members() {
                let expected = !inactive.contains(m) && !disqualified.contains(m);
                prop_assert_eq!(operating.contains(m), expected);
                prop_assert_eq!(group.is_sender_accepted(*m), expected);
            }
        }
    }
}
