//! Subscriber bookkeeping and the unsubscribe handle.

use super::lock::write;
use std::fmt;
use std::sync::{Arc, RwLock, Weak};
use tracing::trace;

/// Zero-argument callback invoked after a dispatch.
pub(crate) type Listener = Arc<dyn Fn() + Send + Sync>;

/// Identity of one subscription.
///
/// Subscribing the same closure twice produces two distinct ids, each
/// removable only through its own [`Unsubscribe`] handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Listeners in registration order.
#[derive(Default)]
pub(crate) struct SubscriberList {
    entries: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SubscriberList {
    pub(crate) fn insert(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    /// Remove one subscription, keeping the relative order of the rest.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(entry, _)| *entry == id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn snapshot(&self) -> Vec<Listener> {
        self.entries
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Handle returned by [`Store::subscribe`](crate::Store::subscribe).
///
/// Calling [`unsubscribe`](Self::unsubscribe) removes exactly the
/// subscription it was created for. Further calls do nothing. Dropping the
/// handle does *not* unsubscribe, and the handle does not keep the store
/// alive.
#[derive(Clone)]
pub struct Unsubscribe {
    subscribers: Weak<RwLock<SubscriberList>>,
    id: SubscriptionId,
}

impl Unsubscribe {
    pub(crate) fn new(subscribers: Weak<RwLock<SubscriberList>>, id: SubscriptionId) -> Self {
        Self { subscribers, id }
    }

    /// The subscription this handle removes.
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// Remove the subscription.
    ///
    /// Returns `true` if this call removed it, `false` if it was already
    /// gone or the store has been dropped.
    pub fn unsubscribe(&self) -> bool {
        let Some(subscribers) = self.subscribers.upgrade() else {
            return false;
        };

        let removed = write(&subscribers).remove(self.id);
        trace!(subscription = %self.id, removed, "unsubscribe");
        removed
    }
}

impl fmt::Debug for Unsubscribe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unsubscribe").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(counter: &Arc<AtomicUsize>) -> Listener {
        let counter = Arc::clone(counter);
        Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn ids_are_unique_per_insert() {
        let mut list = SubscriberList::default();
        let listener: Listener = Arc::new(|| {});

        let first = list.insert(Arc::clone(&listener));
        let second = list.insert(listener);

        assert_ne!(first, second);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn remove_keeps_relative_order() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut list = SubscriberList::default();
        let a = list.insert(counting(&hits));
        let b = list.insert(counting(&hits));
        let c = list.insert(counting(&hits));

        assert!(list.remove(b));

        let remaining: Vec<_> = list.entries.iter().map(|(id, _)| *id).collect();
        assert_eq!(remaining, vec![a, c]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut list = SubscriberList::default();
        let id = list.insert(Arc::new(|| {}));

        assert!(list.remove(id));
        assert!(!list.remove(id));
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn snapshot_is_detached_from_list() {
        let hits = Arc::new(AtomicUsize::new(0));
        let mut list = SubscriberList::default();
        let id = list.insert(counting(&hits));

        let snapshot = list.snapshot();
        list.remove(id);

        for listener in &snapshot {
            listener();
        }
        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn handle_outliving_list_is_noop() {
        let list = Arc::new(RwLock::new(SubscriberList::default()));
        let id = write(&list).insert(Arc::new(|| {}));
        let handle = Unsubscribe::new(Arc::downgrade(&list), id);

        drop(list);

        assert!(!handle.unsubscribe());
    }

    #[test]
    fn subscription_id_displays_with_hash() {
        assert_eq!(SubscriptionId(7).to_string(), "#7");
    }
}
