//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::core::{Action, Reducer, State};
use crate::store::{NotifyPolicy, Store, StoreConfig};

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<S: State, A: Action + 'static> {
    reducer: Option<Box<dyn Reducer<S, A>>>,
    initial: Option<S>,
    config: StoreConfig,
}

impl<S: State, A: Action + 'static> StoreBuilder<S, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            reducer: None,
            initial: None,
            config: StoreConfig::default(),
        }
    }

    /// Set the reducer (required).
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        self.reducer = Some(Box::new(reducer));
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Choose when subscribers are notified.
    pub fn notify(mut self, policy: NotifyPolicy) -> Self {
        self.config.notify = policy;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the store.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Store<S, A>, BuildError> {
        let reducer = self.reducer.ok_or(BuildError::MissingReducer)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(Store::from_boxed(reducer, initial, self.config))
    }
}

impl<S: State + Default, A: Action + 'static> StoreBuilder<S, A> {
    /// Use `S::default()` as the initial state.
    pub fn default_initial(self) -> Self {
        self.initial(S::default())
    }
}

impl<S: State, A: Action + 'static> Default for StoreBuilder<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
