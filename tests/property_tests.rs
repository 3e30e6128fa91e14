//! Property-based tests for the counter reducer and store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated action sequences.

use proptest::prelude::*;
use unistore::counter::{counter_reducer, counter_store, CounterAction, CounterState};

prop_compose! {
    fn arbitrary_action()(variant in 0..4u8) -> CounterAction {
        match variant {
            0 => CounterAction::Add,
            1 => CounterAction::Subtract,
            2 => CounterAction::Reset,
            _ => CounterAction::Unrecognized,
        }
    }
}

prop_compose! {
    fn add_or_subtract()(add in any::<bool>()) -> CounterAction {
        if add {
            CounterAction::Add
        } else {
            CounterAction::Subtract
        }
    }
}

proptest! {
    #[test]
    fn count_is_adds_minus_subtracts(
        actions in prop::collection::vec(add_or_subtract(), 0..200)
    ) {
        let store = counter_store();
        for action in &actions {
            store.dispatch(action.clone());
        }

        let adds = actions.iter().filter(|a| **a == CounterAction::Add).count() as i64;
        let subtracts = actions.len() as i64 - adds;
        prop_assert_eq!(store.get_state().count, adds - subtracts);
    }

    #[test]
    fn reset_always_returns_to_zero(
        actions in prop::collection::vec(arbitrary_action(), 0..50)
    ) {
        let store = counter_store();
        for action in actions {
            store.dispatch(action);
        }

        store.dispatch(CounterAction::Reset);
        prop_assert_eq!(store.get_state().count, 0);

        store.dispatch(CounterAction::Add);
        prop_assert_eq!(store.get_state().count, 1);
    }

    #[test]
    fn unrecognized_action_leaves_state_unchanged(count in any::<i64>()) {
        let state = CounterState { count };
        prop_assert_eq!(counter_reducer(&state, &CounterAction::Unrecognized), state);
    }

    #[test]
    fn reducer_is_deterministic(count in any::<i64>(), action in arbitrary_action()) {
        let state = CounterState { count };
        let first = counter_reducer(&state, &action);
        let second = counter_reducer(&state, &action);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn every_dispatch_notifies_once(
        actions in prop::collection::vec(arbitrary_action(), 0..50)
    ) {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        let store = counter_store();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for action in &actions {
            store.dispatch(action.clone());
        }

        prop_assert_eq!(calls.load(Ordering::SeqCst), actions.len());
        prop_assert_eq!(store.metadata().dispatch_count, actions.len() as u64);
    }

    #[test]
    fn action_roundtrip_serialization(action in arbitrary_action()) {
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: CounterAction = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(action, deserialized);
    }

    #[test]
    fn state_roundtrip_serialization(count in any::<i64>()) {
        let state = CounterState { count };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: CounterState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
