//! ThemePreferenceStore - observable light/dark preference with persistence
//!
//! Holds the active theme mode, persists it through the preference port,
//! and notifies observers after every change. The store is created once
//! at startup and owned by the UI root, which passes it explicitly to
//! the screens that need it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::application::ports::PreferencePort;
use crate::domain::entities::ThemeMode;
use crate::domain::errors::PreferenceError;
use crate::shared::subscription::{Subscribers, SubscriptionId};

/// Preference key the mode is stored under
pub const THEME_MODE_KEY: &str = "theme_mode";

/// Observable theme preference backed by a key-value store
pub struct ThemePreferenceStore {
    preferences: Arc<dyn PreferencePort>,
    mode: Mutex<ThemeMode>,
    initialized: AtomicBool,
    // Serializes overlapping toggle/set_mode calls so the
    // read-modify-write of `mode` never loses an update.
    write_lock: tokio::sync::Mutex<()>,
    subscribers: Subscribers,
}

impl ThemePreferenceStore {
    /// Create a store in the Light default; call `initialize` once to
    /// restore the persisted mode.
    pub fn new(preferences: Arc<dyn PreferencePort>) -> Self {
        Self {
            preferences,
            mode: Mutex::new(ThemeMode::Light),
            initialized: AtomicBool::new(false),
            write_lock: tokio::sync::Mutex::new(()),
            subscribers: Subscribers::new(),
        }
    }

    /// Restore the persisted mode. Call exactly once at startup; a
    /// second call is a guarded no-op. An unreadable preference is
    /// recovered locally by defaulting to Light and never surfaced.
    /// Observers are notified exactly once.
    pub async fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            warn!("theme store initialized twice; ignoring");
            return;
        }
        let _guard = self.write_lock.lock().await;
        let stored = match self.preferences.get_string(THEME_MODE_KEY).await {
            Ok(value) => value,
            Err(err) => {
                warn!("theme preference unreadable, defaulting to light: {err}");
                None
            }
        };
        let mode = ThemeMode::from_persisted(stored.as_deref());
        *self.mode.lock() = mode;
        debug!(?mode, "theme store initialized");
        self.subscribers.notify();
    }

    /// Current mode; never blocks, Light before `initialize` completes
    pub fn mode(&self) -> ThemeMode {
        *self.mode.lock()
    }

    /// Flip Light <-> Dark, persist, then notify observers.
    /// On a write failure the in-memory flip and the notification still
    /// happen; the error is returned as a recoverable diagnostic.
    pub async fn toggle(&self) -> Result<ThemeMode, PreferenceError> {
        let guard = self.write_lock.lock().await;
        let target = self.mode.lock().toggled();
        self.apply(target, guard).await
    }

    /// Set an explicit mode. A no-op (no write, no notification) when
    /// the target already holds; otherwise behaves like `toggle`.
    pub async fn set_mode(&self, target: ThemeMode) -> Result<ThemeMode, PreferenceError> {
        let guard = self.write_lock.lock().await;
        if *self.mode.lock() == target {
            return Ok(target);
        }
        self.apply(target, guard).await
    }

    async fn apply(
        &self,
        target: ThemeMode,
        guard: tokio::sync::MutexGuard<'_, ()>,
    ) -> Result<ThemeMode, PreferenceError> {
        *self.mode.lock() = target;
        let written = self
            .preferences
            .set_string(THEME_MODE_KEY, target.as_persisted())
            .await;
        if let Err(err) = &written {
            warn!("theme preference not persisted: {err}");
        }
        debug!(mode = ?target, "theme mode changed");
        self.subscribers.notify();
        drop(guard);
        written.map(|()| target)
    }

    /// Register an observer; invoked after every mode change, in
    /// registration order
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribers.subscribe(callback)
    }

    /// Remove a previously registered observer
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.unsubscribe(id);
    }

    /// Drop all observers; counterpart to `initialize` on teardown
    pub fn shutdown(&self) {
        debug!("theme store shutting down");
        self.subscribers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MemoryPreferences;
    use std::sync::atomic::AtomicUsize;

    fn store_with(prefs: Arc<MemoryPreferences>) -> ThemePreferenceStore {
        ThemePreferenceStore::new(prefs)
    }

    fn counted_subscription(store: &ThemePreferenceStore) -> Arc<AtomicUsize> {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        count
    }

    #[tokio::test]
    async fn test_default_on_first_run() {
        let store = store_with(Arc::new(MemoryPreferences::new()));
        assert_eq!(store.mode(), ThemeMode::Light);
        store.initialize().await;
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_initialize_restores_dark() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set_string(THEME_MODE_KEY, "dark").await.unwrap();
        let store = store_with(prefs);
        store.initialize().await;
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_initialize_notifies_exactly_once() {
        let store = store_with(Arc::new(MemoryPreferences::new()));
        let count = counted_subscription(&store);
        store.initialize().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Second call is a guarded no-op
        store.initialize().await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_round_trip_persistence() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = store_with(Arc::clone(&prefs));
        store.initialize().await;

        for _ in 0..3 {
            let expected = store.toggle().await.unwrap();
            let fresh = store_with(Arc::clone(&prefs));
            fresh.initialize().await;
            assert_eq!(fresh.mode(), expected);
        }
    }

    #[tokio::test]
    async fn test_set_mode_is_idempotent() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = store_with(Arc::clone(&prefs));
        store.initialize().await;
        let count = counted_subscription(&store);

        let result = store.set_mode(ThemeMode::Light).await.unwrap();
        assert_eq!(result, ThemeMode::Light);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(prefs.write_count(), 0);
    }

    #[tokio::test]
    async fn test_set_mode_changes_and_persists() {
        let prefs = Arc::new(MemoryPreferences::new());
        let store = store_with(Arc::clone(&prefs));
        store.initialize().await;
        let count = counted_subscription(&store);

        store.set_mode(ThemeMode::Dark).await.unwrap();
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(
            prefs.get_string(THEME_MODE_KEY).await.unwrap(),
            Some("dark".to_string())
        );
    }

    #[tokio::test]
    async fn test_observer_fan_out_order() {
        let store = store_with(Arc::new(MemoryPreferences::new()));
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in 0..3 {
            let order = Arc::clone(&order);
            store.subscribe(move || order.lock().push(tag));
        }
        store.toggle().await.unwrap();
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_observer_sees_new_mode() {
        let store = Arc::new(store_with(Arc::new(MemoryPreferences::new())));
        let seen = Arc::new(Mutex::new(None));
        let inner = Arc::clone(&store);
        let slot = Arc::clone(&seen);
        store.subscribe(move || {
            *slot.lock() = Some(inner.mode());
        });
        store.toggle().await.unwrap();
        assert_eq!(*seen.lock(), Some(ThemeMode::Dark));
    }

    #[tokio::test]
    async fn test_write_failure_still_flips_and_notifies() {
        let prefs = Arc::new(MemoryPreferences::new());
        prefs.set_fail_writes(true);
        let store = store_with(Arc::clone(&prefs));
        store.initialize().await;
        let count = counted_subscription(&store);

        let err = store.toggle().await.unwrap_err();
        assert!(matches!(err, PreferenceError::Write(_)));
        assert_eq!(store.mode(), ThemeMode::Dark);
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // The store stays usable after the failure
        prefs.set_fail_writes(false);
        assert_eq!(store.toggle().await.unwrap(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_concurrent_toggles_are_serialized() {
        let store = Arc::new(store_with(Arc::new(MemoryPreferences::new())));
        store.initialize().await;

        let a = Arc::clone(&store);
        let b = Arc::clone(&store);
        let (first, second) = tokio::join!(
            async move { a.toggle().await },
            async move { b.toggle().await },
        );
        first.unwrap();
        second.unwrap();

        // Two flips from Light always land back on Light
        assert_eq!(store.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_unsubscribe_stops_notifications() {
        let store = store_with(Arc::new(MemoryPreferences::new()));
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let id = store.subscribe(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        store.unsubscribe(id);
        store.toggle().await.unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }
}
