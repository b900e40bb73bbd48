//! Selection and expiration integration tests.

use parking_lot::Mutex;
use pharos_core::{member::member_indices, BlockHeight, ChaChaEntropy, EntropySource, PharosError};
use pharos_registry::{GroupRegistry, RegistryConfig, SelectedGroup};
use proptest::prelude::*;
use std::collections::VecDeque;
use std::sync::Arc;

/// Entropy handler replaying a fixed script of draws; falls back to the
/// first slot once the script runs out.
struct ScriptedEntropy {
    picks: Mutex<VecDeque<usize>>,
}

impl ScriptedEntropy {
    fn new(picks: impl IntoIterator<Item = usize>) -> Arc<Self> {
        Arc::new(Self {
            picks: Mutex::new(picks.into_iter().collect()),
        })
    }
}

impl EntropySource for ScriptedEntropy {
    fn pick(&self, upper_bound: usize) -> usize {
        let next = self.picks.lock().pop_front().unwrap_or(0);
        next.min(upper_bound - 1)
    }
}

fn registry_with(
    threshold: usize,
    lifetime: u64,
    entropy: Arc<dyn EntropySource>,
) -> GroupRegistry {
    GroupRegistry::new(
        RegistryConfig {
            active_groups_threshold: threshold,
            group_lifetime_blocks: lifetime,
        },
        entropy,
    )
}

#[test]
fn test_threshold_guard_stops_expiration() {
    let registry = registry_with(2, 100, ScriptedEntropy::new([0, 0, 1, 0, 1, 0]));
    for _ in 0..3 {
        registry
            .register_group(member_indices(5), BlockHeight::new(0))
            .unwrap();
    }

    // All three groups are long past their timeout. The first call may
    // retire groups only down to the threshold, then must return one as-is.
    let selected = registry.select_group(BlockHeight::new(10_000)).unwrap();
    assert_eq!(selected.members.len(), 5);
    let snapshot = registry.snapshot();
    assert_eq!(snapshot.active_groups, 2);
    assert_eq!(snapshot.expired_groups, 1);

    // At the floor: stale groups keep being returned, none are evicted.
    for _ in 0..5 {
        assert!(registry.select_group(BlockHeight::new(1_000_000)).is_ok());
        assert_eq!(registry.active_group_count(), 2);
    }
}

#[test]
fn test_each_eviction_relocates_exactly_one_agreement() {
    let registry = registry_with(0, 50, ScriptedEntropy::new([0; 16]));
    let mut before = Vec::new();
    for height in [10u64, 20, 30] {
        before.push(
            registry
                .register_group(member_indices(3), BlockHeight::new(height))
                .unwrap(),
        );
    }

    // Every group is expired and the threshold is zero, so selection drains
    // the whole pool and reports unavailability.
    let result = registry.select_group(BlockHeight::new(500));
    assert!(matches!(result, Err(PharosError::Unavailable { .. })));

    let snapshot = registry.snapshot();
    assert_eq!(snapshot.active_groups, 0);
    assert_eq!(snapshot.expired_groups, before.len());
}

#[test]
fn test_fresh_group_selected_then_evicted_after_timeout() {
    let registry = registry_with(0, 100, ScriptedEntropy::new([0; 8]));
    let id = registry
        .register_group(member_indices(4), BlockHeight::new(500))
        .unwrap();

    // Within the lifetime the group is returned unexpired.
    let selected: SelectedGroup = registry.select_group(BlockHeight::new(550)).unwrap();
    assert_eq!(selected.id, id);
    assert_eq!(registry.active_group_count(), 1);

    // Past the deadline it is moved to the expired list.
    let result = registry.select_group(BlockHeight::new(601));
    assert!(matches!(result, Err(PharosError::Unavailable { .. })));
    let snapshot = registry.snapshot();
    assert_eq!(snapshot.active_groups, 0);
    assert_eq!(snapshot.expired_groups, 1);
}

#[test]
fn test_unexpired_candidate_survives_eviction_of_others() {
    // Old group in slot 0, fresh group in slot 1; the script hits the old
    // one first and must land on the fresh one after retiring it.
    let registry = registry_with(0, 100, ScriptedEntropy::new([0, 0]));
    registry
        .register_group(member_indices(3), BlockHeight::new(0))
        .unwrap();
    let fresh = registry
        .register_group(member_indices(6), BlockHeight::new(190))
        .unwrap();

    let selected = registry.select_group(BlockHeight::new(200)).unwrap();
    assert_eq!(selected.id, fresh);
    assert_eq!(registry.active_group_count(), 1);
}

proptest! {
    // The active pool never shrinks below the threshold, however stale the
    // groups and however many selections run.
    #[test]
    fn prop_active_pool_never_drops_below_threshold(
        threshold in 0usize..6,
        groups in 1usize..12,
        seed in any::<[u8; 32]>(),
        calls in 1usize..24,
    ) {
        let registry = registry_with(
            threshold,
            10,
            Arc::new(ChaChaEntropy::from_seed(seed)),
        );
        for _ in 0..groups {
            registry
                .register_group(member_indices(3), BlockHeight::new(0))
                .unwrap();
        }

        let floor = groups.min(threshold);
        for _ in 0..calls {
            let result = registry.select_group(BlockHeight::new(1_000));
            let snapshot = registry.snapshot();
            prop_assert!(snapshot.active_groups >= floor);
            prop_assert_eq!(
                snapshot.active_groups + snapshot.expired_groups,
                groups
            );
            match result {
                Ok(_) => prop_assert!(snapshot.active_groups > 0),
                Err(PharosError::Unavailable { .. }) => {
                    prop_assert_eq!(snapshot.active_groups, 0);
                    prop_assert_eq!(threshold, 0);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}
