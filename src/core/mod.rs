//! Core store types and logic.
//!
//! This module contains the pure functional core of the store:
//! - State and action contracts via the `State` and `Action` traits
//! - Transition functions via the `Reducer` trait
//!
//! All logic in this module is pure (no side effects). The `Store`
//! is the only place where state is replaced.

mod reducer;
mod state;

pub use reducer::Reducer;
pub use state::{Action, State};
