//! Reducers: pure transition functions.
//!
//! A reducer maps the current state and an action to the next state.
//! It must be deterministic and free of side effects.

use super::state::{Action, State};

/// Pure transition function from `(state, action)` to the next state.
///
/// Reducers must be total: every `(state, action)` pair yields a state.
/// Actions a reducer does not recognise should return the input
/// unchanged.
///
/// Any `Fn(&S, &A) -> S + Send + Sync` is a reducer, so plain functions
/// and closures can be handed to a store directly.
///
/// # Example
///
/// ```rust
/// use unistore::core::{Action, Reducer};
///
/// #[derive(Debug)]
/// enum Step {
///     Double,
///     Noop,
/// }
///
/// impl Action for Step {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Double => "DOUBLE",
///             Self::Noop => "NOOP",
///         }
///     }
/// }
///
/// let double = |state: &u32, action: &Step| match action {
///     Step::Double => state * 2,
///     Step::Noop => *state,
/// };
///
/// assert_eq!(double.reduce(&3, &Step::Double), 6);
/// assert_eq!(double.reduce(&3, &Step::Noop), 3);
/// ```
pub trait Reducer<S: State, A: Action>: Send + Sync {
    /// Compute the next state. Must not touch shared mutable data.
    fn reduce(&self, state: &S, action: &A) -> S;
}

impl<S, A, F> Reducer<S, A> for F
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> S + Send + Sync,
{
    fn reduce(&self, state: &S, action: &A) -> S {
        self(state, action)
    }
}
