//! Observer subscription registry
//!
//! Shared by the theme store and the catalog loader: callbacks are
//! invoked with no arguments after every state change, in registration
//! order. Fan-out iterates a defensive snapshot of the list, so a
//! callback may subscribe or unsubscribe reentrantly without deadlocking
//! or affecting the fan-out already in progress.

use std::sync::Arc;

use parking_lot::Mutex;

/// Callback invoked after a state change
pub type Observer = Arc<dyn Fn() + Send + Sync>;

/// Handle identifying one subscription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Registry of observers with registration-order fan-out
#[derive(Default)]
pub struct Subscribers {
    inner: Mutex<SubscriberList>,
}

#[derive(Default)]
struct SubscriberList {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

impl Subscribers {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; returns the handle used to unsubscribe
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.entries.push((id, Arc::new(callback)));
        id
    }

    /// Remove a subscription; unknown handles are ignored
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.lock().entries.retain(|(entry_id, _)| *entry_id != id);
    }

    /// Invoke every observer once, in registration order.
    /// The lock is released before any callback runs.
    pub fn notify(&self) {
        let snapshot: Vec<Observer> = self
            .inner
            .lock()
            .entries
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in snapshot {
            observer();
        }
    }

    /// Number of registered observers
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether no observers are registered
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Drop every subscription
    pub fn clear(&self) {
        self.inner.lock().entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_fan_out_in_registration_order() {
        let subscribers = Subscribers::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = Arc::clone(&order);
            subscribers.subscribe(move || order.lock().push(tag));
        }
        subscribers.notify();
        assert_eq!(*order.lock(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_each_observer_invoked_exactly_once() {
        let subscribers = Subscribers::new();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..4 {
            let count = Arc::clone(&count);
            subscribers.subscribe(move || {
                count.fetch_add(1, Ordering::SeqCst);
            });
        }
        subscribers.notify();
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_unsubscribe_removes_entry() {
        let subscribers = Subscribers::new();
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let id = subscribers.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        subscribers.unsubscribe(id);
        subscribers.notify();
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(subscribers.is_empty());
    }

    #[test]
    fn test_reentrant_unsubscribe_does_not_deadlock() {
        let subscribers = Arc::new(Subscribers::new());
        let inner = Arc::clone(&subscribers);
        let id_slot: Arc<Mutex<Option<SubscriptionId>>> = Arc::new(Mutex::new(None));
        let slot = Arc::clone(&id_slot);
        let id = subscribers.subscribe(move || {
            if let Some(id) = slot.lock().take() {
                inner.unsubscribe(id);
            }
        });
        *id_slot.lock() = Some(id);
        subscribers.notify();
        assert!(subscribers.is_empty());
    }
}
