//! The counter store: the reference reducer shipped with the crate.
//!
//! `ADD` and `SUBTRACT` move the count by one, `RESET` returns it to zero,
//! and any other action type leaves the state untouched.

use crate::action_enum;
use crate::store::Store;
use serde::{Deserialize, Serialize};

/// State of the counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
}

action_enum! {
    /// Actions understood by [`counter_reducer`].
    pub enum CounterAction {
        Add => "ADD",
        Subtract => "SUBTRACT",
        Reset => "RESET",
    }
    unrecognized: Unrecognized
}

/// A store holding a [`CounterState`].
pub type CounterStore = Store<CounterState, CounterAction>;

/// Transition function for the counter.
///
/// There is no floor: `SUBTRACT` from zero yields `-1`. Arithmetic wraps at
/// the `i64` bounds so the reducer never panics.
///
/// # Example
///
/// ```rust
/// use unistore::counter::{counter_reducer, CounterAction, CounterState};
///
/// let state = CounterState::default();
/// let state = counter_reducer(&state, &CounterAction::Add);
/// let state = counter_reducer(&state, &CounterAction::Add);
/// assert_eq!(state.count, 2);
///
/// let state = counter_reducer(&state, &CounterAction::Reset);
/// assert_eq!(state.count, 0);
/// ```
pub fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    match action {
        CounterAction::Add => CounterState {
            count: state.count.wrapping_add(1),
        },
        CounterAction::Subtract => CounterState {
            count: state.count.wrapping_sub(1),
        },
        CounterAction::Reset => CounterState { count: 0 },
        CounterAction::Unrecognized => *state,
    }
}

/// Create a counter store starting at zero.
pub fn counter_store() -> CounterStore {
    Store::with_default_state(counter_reducer)
}

/// Dispatch `ADD`.
pub fn increment(store: &CounterStore) {
    store.dispatch(CounterAction::Add);
}

/// Dispatch `SUBTRACT`.
pub fn decrement(store: &CounterStore) {
    store.dispatch(CounterAction::Subtract);
}

/// Dispatch `RESET`.
pub fn reset(store: &CounterStore) {
    store.dispatch(CounterAction::Reset);
}
