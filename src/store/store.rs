use super::config::{NotifyPolicy, StoreConfig};
use super::lock::{lock, read, write};
use super::metadata::StoreMetadata;
use super::subscription::{SubscriberList, Unsubscribe};
use crate::core::{Action, Reducer, State};
use chrono::Utc;
use std::fmt;
use std::sync::{Arc, Mutex, RwLock};
use tracing::{debug, debug_span, trace};

/// A thread-safe container for a single state value.
///
/// The state only changes through [`dispatch`](Self::dispatch), which runs
/// the store's reducer and then notifies every subscriber. Cloning a store
/// clones the handle, not the state: all clones share one state and one
/// subscriber list, which is how listeners read the new state. A listener
/// that captures a clone keeps the store alive until it is unsubscribed.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicI64, Ordering};
/// use std::sync::Arc;
/// use unistore::counter::{counter_reducer, CounterAction, CounterState};
/// use unistore::Store;
///
/// let store = Store::new(counter_reducer, CounterState::default());
///
/// let seen = Arc::new(AtomicI64::new(0));
/// let reader = store.clone();
/// let sink = Arc::clone(&seen);
/// let unsubscribe = store.subscribe(move || {
///     sink.store(reader.get_state().count, Ordering::SeqCst);
/// });
///
/// store.dispatch(CounterAction::Add);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
///
/// unsubscribe.unsubscribe();
/// store.dispatch(CounterAction::Add);
/// assert_eq!(store.get_state().count, 2);
/// assert_eq!(seen.load(Ordering::SeqCst), 1);
/// ```
pub struct Store<S: State, A: Action + 'static> {
    inner: Arc<StoreInner<S, A>>,
}

struct StoreInner<S: State, A: Action + 'static> {
    reducer: Box<dyn Reducer<S, A>>,
    config: StoreConfig,
    state: RwLock<Arc<S>>,
    // Held for reduce + swap so concurrent dispatches cannot lose updates.
    transition: Mutex<StoreMetadata>,
    subscribers: Arc<RwLock<SubscriberList>>,
}

impl<S: State, A: Action + 'static> Store<S, A> {
    /// Create a store with the given reducer and initial state.
    pub fn new<R>(reducer: R, initial: S) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::with_config(reducer, initial, StoreConfig::default())
    }

    /// Create a store with explicit configuration.
    pub fn with_config<R>(reducer: R, initial: S, config: StoreConfig) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::from_boxed(Box::new(reducer), initial, config)
    }

    pub(crate) fn from_boxed(
        reducer: Box<dyn Reducer<S, A>>,
        initial: S,
        config: StoreConfig,
    ) -> Self {
        debug!(notify = ?config.notify, initial = ?initial, "store created");
        Self {
            inner: Arc::new(StoreInner {
                reducer,
                config,
                state: RwLock::new(Arc::new(initial)),
                transition: Mutex::new(StoreMetadata::new(Utc::now())),
                subscribers: Arc::new(RwLock::new(SubscriberList::default())),
            }),
        }
    }

    /// Get the current state (pure, O(1)).
    pub fn get_state(&self) -> Arc<S> {
        Arc::clone(&read(&self.inner.state))
    }

    /// Apply an action and notify subscribers.
    ///
    /// The reducer runs against the current state; its result replaces the
    /// current state, then every subscriber registered at that point is
    /// called in registration order.
    ///
    /// If the reducer panics the panic propagates to the caller and the
    /// state is left as it was. A reducer must not dispatch into its own
    /// store.
    pub fn dispatch(&self, action: A) {
        let span = debug_span!("dispatch", action = action.kind());
        let _enter = span.enter();

        if !self.transition(&action) {
            trace!("state unchanged, notification skipped");
            return;
        }

        self.notify();
    }

    /// Run the reducer and swap state. Returns whether to notify.
    fn transition(&self, action: &A) -> bool {
        let mut metadata = lock(&self.inner.transition);
        let current = self.get_state();
        let next = self.inner.reducer.reduce(&current, action);

        let skip = self.inner.config.notify == NotifyPolicy::OnChange && next == *current;
        if !skip {
            *write(&self.inner.state) = Arc::new(next);
        }

        metadata.record_dispatch(Utc::now(), !skip);
        debug!(
            dispatch_count = metadata.dispatch_count,
            replaced = !skip,
            "reduced"
        );
        !skip
    }

    fn notify(&self) {
        let listeners = read(&self.inner.subscribers).snapshot();
        trace!(listeners = listeners.len(), "notifying");
        for listener in &listeners {
            listener();
        }
    }

    /// Register a listener called after every dispatch.
    ///
    /// Returns the handle that removes this subscription again.
    pub fn subscribe<F>(&self, listener: F) -> Unsubscribe
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = write(&self.inner.subscribers).insert(Arc::new(listener));
        trace!(subscription = %id, "subscribe");
        Unsubscribe::new(Arc::downgrade(&self.inner.subscribers), id)
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        read(&self.inner.subscribers).len()
    }

    /// Snapshot of the store's bookkeeping.
    pub fn metadata(&self) -> StoreMetadata {
        lock(&self.inner.transition).clone()
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.inner.config
    }
}

impl<S: State + Default, A: Action + 'static> Store<S, A> {
    /// Create a store starting from `S::default()`.
    pub fn with_default_state<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::new(reducer, S::default())
    }
}

impl<S: State, A: Action + 'static> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: State, A: Action + 'static> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.get_state())
            .field("subscribers", &self.subscriber_count())
            .field("config", &self.inner.config)
            .finish()
    }
}
