//! Store configuration.

use serde::{Deserialize, Serialize};

/// When listeners are notified after a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotifyPolicy {
    /// Notify after every dispatch, even if the reducer returned an equal
    /// state.
    #[default]
    Always,

    /// Notify only when the next state differs from the current one.
    /// Unchanged dispatches keep the current state value in place.
    OnChange,
}

/// Settings fixed for the lifetime of a store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    pub notify: NotifyPolicy,
}
