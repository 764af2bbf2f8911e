//! CatalogLoader - loads the bundled catalog and tracks its load state
//!
//! Drives the Loading -> Loaded/Failed state machine for the catalog
//! view and answers category-filtered queries against the loaded items.
//! Retry policy: entering `Loading` discards the prior items immediately,
//! so a stale list is never shown while a retry is in flight. Each load
//! carries a generation token; a completion whose generation is no longer
//! current is discarded without a notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::application::ports::AssetPort;
use crate::domain::entities::{CatalogItem, CatalogLoadState};
use crate::domain::errors::CatalogError;
use crate::domain::services::CatalogDecoder;
use crate::domain::value_objects::CategoryFilter;
use crate::shared::subscription::{Subscribers, SubscriptionId};

/// Observable catalog load state with category filtering
pub struct CatalogLoader {
    assets: Arc<dyn AssetPort>,
    asset_name: String,
    decoder: CatalogDecoder,
    state: Mutex<CatalogLoadState>,
    filter: Mutex<CategoryFilter>,
    generation: AtomicU64,
    subscribers: Subscribers,
}

impl CatalogLoader {
    /// Create a loader for a named asset; starts in `Loading` with the
    /// `"All"` filter until `load` is called
    pub fn new(assets: Arc<dyn AssetPort>, asset_name: impl Into<String>) -> Self {
        Self {
            assets,
            asset_name: asset_name.into(),
            decoder: CatalogDecoder::new(),
            state: Mutex::new(CatalogLoadState::Loading),
            filter: Mutex::new(CategoryFilter::all()),
            generation: AtomicU64::new(0),
            subscribers: Subscribers::new(),
        }
    }

    /// Load (or reload) the catalog. `Loading` is entered and observers
    /// notified before the first suspension point; the terminal
    /// transition notifies once more. A load superseded by a newer one
    /// completes without applying its result.
    pub async fn load(&self) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *self.state.lock() = CatalogLoadState::Loading;
        debug!(generation, asset = %self.asset_name, "catalog load started");
        self.subscribers.notify();

        let outcome = self.fetch().await;

        let next = match outcome {
            Ok(items) => {
                debug!(generation, count = items.len(), "catalog load finished");
                CatalogLoadState::Loaded(items)
            }
            Err(err) => {
                warn!(generation, "catalog load failed: {err}");
                CatalogLoadState::Failed(err.to_string())
            }
        };

        {
            let mut state = self.state.lock();
            // A newer load superseded this one; its result is stale.
            if self.generation.load(Ordering::SeqCst) != generation {
                warn!(generation, "discarding stale catalog load result");
                return;
            }
            *state = next;
        }
        self.subscribers.notify();
    }

    /// Re-fetch from scratch; safe from `Failed` or `Loaded`
    pub async fn retry(&self) {
        self.load().await;
    }

    async fn fetch(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let text = self.assets.read_string(&self.asset_name).await?;
        self.decoder.decode(&text)
    }

    /// Snapshot of the current load state; never blocks
    pub fn state(&self) -> CatalogLoadState {
        self.state.lock().clone()
    }

    /// Set the active category filter; the load state is untouched and
    /// no observer notification fires
    pub fn set_category_filter(&self, category: impl Into<String>) {
        let filter = CategoryFilter::named(category);
        debug!(filter = %filter, "category filter changed");
        *self.filter.lock() = filter;
    }

    /// The active category filter
    pub fn category_filter(&self) -> CategoryFilter {
        self.filter.lock().clone()
    }

    /// Items passing the active filter, in original catalog order.
    /// Empty unless the state is `Loaded`. Computed fresh on every call;
    /// nothing is cached across filter changes.
    pub fn visible_items(&self) -> Vec<CatalogItem> {
        let filter = self.filter.lock().clone();
        match &*self.state.lock() {
            CatalogLoadState::Loaded(items) => items
                .iter()
                .filter(|item| filter.matches(&item.category))
                .cloned()
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Register an observer; invoked after every load-state transition
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

    /// Drop all observers on teardown
    pub fn shutdown(&self) {
        debug!("catalog loader shutting down");
        self.subscribers.clear();
    }
}
