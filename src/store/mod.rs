//! The store: one current state, replaced through a reducer, with ordered
//! subscribers notified after every dispatch.
//!
//! # Key Concepts
//!
//! - **Store**: cheaply cloneable, thread-safe handle to a single state
//! - **Subscriptions**: zero-argument listeners, removed through the
//!   [`Unsubscribe`] handle returned by [`Store::subscribe`]
//! - **Configuration**: [`NotifyPolicy`] chooses between unconditional
//!   notification and notifying only on change
//!
//! # Notification semantics
//!
//! Listeners run after the transition lock is released, over a snapshot of
//! the subscriber list taken once the new state is in place. A listener
//! added during notification is first called on the next dispatch; a
//! listener removed during notification still runs for the current one.
//! Listeners may dispatch again; the nested dispatch completes its own
//! cycle before the outer notification loop resumes.

mod config;
mod lock;
mod metadata;
mod store;
mod subscription;

pub use config::{NotifyPolicy, StoreConfig};
pub use metadata::StoreMetadata;
pub use store::Store;
pub use subscription::{SubscriptionId, Unsubscribe};
