//! Unistore: a minimal unidirectional state store
//!
//! A store owns exactly one state value. The only way to change it is to
//! dispatch an action: the store runs a pure reducer over the current state
//! and the action, replaces the state with the result, and notifies every
//! subscriber in registration order.
//!
//! # Core Concepts
//!
//! - **State**: any comparable, debuggable, thread-safe value
//! - **Action**: a tagged value describing an intended change (`Action` trait)
//! - **Reducer**: pure `(state, action) -> state` function (`Reducer` trait)
//! - **Store**: holds the state and the subscriber list
//!
//! # Example
//!
//! ```rust
//! use unistore::counter::{counter_reducer, CounterAction, CounterState};
//! use unistore::Store;
//!
//! let store = Store::new(counter_reducer, CounterState { count: 0 });
//!
//! store.dispatch(CounterAction::Add);
//! store.dispatch(CounterAction::Add);
//! store.dispatch(CounterAction::Subtract);
//! assert_eq!(store.get_state().count, 1);
//!
//! store.dispatch(CounterAction::Reset);
//! assert_eq!(store.get_state().count, 0);
//! ```

pub mod builder;
pub mod core;
pub mod counter;
pub mod store;

// Re-export commonly used types
pub use self::builder::{BuildError, StoreBuilder};
pub use self::core::{Action, Reducer, State};
pub use self::store::{NotifyPolicy, Store, StoreConfig, StoreMetadata, Unsubscribe};
