//! Bookkeeping kept alongside the current state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata tracked by a store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last time the current state was replaced
    pub updated_at: DateTime<Utc>,

    /// Number of dispatches that ran the reducer to completion
    pub dispatch_count: u64,
}

impl StoreMetadata {
    pub(crate) fn new(now: DateTime<Utc>) -> Self {
        Self {
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
        }
    }

    pub(crate) fn record_dispatch(&mut self, now: DateTime<Utc>, replaced: bool) {
        self.dispatch_count += 1;
        if replaced {
            self.updated_at = now;
        }
    }
}

impl Default for StoreMetadata {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}
