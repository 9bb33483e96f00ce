//! Property tests for dispatch, subscriptions and snapshots.

use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use upkeep_store::{reduce, Slices, UiAction, UiState, UiStore};
use upkeep_test_utils::assertions::assert_sharing_matches;
use upkeep_test_utils::fixtures::busy_state;
use upkeep_test_utils::generators::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(96))]

    #[test]
    fn store_agrees_with_reduce(actions in arb_action_sequence(30)) {
        let mut store = UiStore::new();
        let mut expected = UiState::initial();
        for action in actions {
            expected = reduce(&expected, action.clone());
            store.dispatch(action);
        }
        prop_assert_eq!(store.state(), &expected);
    }

    #[test]
    fn subscribers_see_exactly_the_changed_slices(actions in arb_action_sequence(30)) {
        let mut store = UiStore::new();
        let seen: Rc<RefCell<Vec<Slices>>> = Rc::default();
        let sink = Rc::clone(&seen);
        store.subscribe(move |_, changed| sink.borrow_mut().push(changed));

        let mut expected = Vec::new();
        for action in actions {
            let before = store.snapshot();
            let changed = store.dispatch(action);
            assert_sharing_matches(&before, store.state(), changed);
            if !changed.is_empty() {
                expected.push(changed);
            }
        }
        prop_assert_eq!(&*seen.borrow(), &expected);
    }

    #[test]
    fn snapshots_never_alias_later_dispatches(
        prefix in arb_action_sequence(15),
        suffix in arb_action_sequence(15),
    ) {
        let mut store = UiStore::new();
        store.dispatch_all(prefix);
        let snapshot = store.snapshot();
        let frozen = serde_json::to_value(&snapshot).map_err(|e| TestCaseError::fail(e.to_string()))?;
        store.dispatch_all(suffix);
        let after = serde_json::to_value(&snapshot).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(frozen, after);
    }

    #[test]
    fn dispatch_count_counts_every_action(actions in arb_action_sequence(25)) {
        let mut store = UiStore::new();
        let n = actions.len() as u64;
        store.dispatch_all(actions);
        prop_assert_eq!(store.dispatch_count(), n);
    }

    #[test]
    fn unchanged_slices_keep_identity_across_single_slice_actions(action in arb_filter_action()) {
        let mut store = UiStore::with_state(busy_state());
        let before = store.snapshot();
        let changed = store.dispatch(action);
        prop_assert!((changed - Slices::FILTERS).is_empty());
        assert_sharing_matches(&before, store.state(), changed);
    }
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let mut store = UiStore::new();
    let calls = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&calls);
    let id = store.subscribe(move |_, _| *counter.borrow_mut() += 1);

    store.dispatch(UiAction::ToggleSidebar);
    assert!(store.unsubscribe(id));
    store.dispatch(UiAction::ToggleSidebar);

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn reset_from_busy_state_reports_every_touched_slice() {
    let mut store = UiStore::with_state(busy_state());
    let changed = store.dispatch(UiAction::ResetUi);
    for slice in [
        Slices::MODALS,
        Slices::SIDEBAR,
        Slices::FILTERS,
        Slices::PAGINATION,
        Slices::VIEW_MODE,
        Slices::LOADING,
        Slices::NOTIFICATIONS,
        Slices::THEME,
        Slices::SELECTION,
        Slices::DRAWERS,
        Slices::QUICK_ACTIONS,
        Slices::ONBOARDING,
        Slices::COMPARISON,
        Slices::DRAG_DROP,
    ] {
        assert!(changed.contains(slice), "{slice:?} missing from {changed:?}");
    }
    assert!(!changed.contains(Slices::ACTIVE_TABS));
    assert_eq!(store.state(), &UiState::initial());
}
