//! CompositionRoot - Dependency Injection Container
//!
//! Wires the filesystem adapters into the two application services and
//! owns them for the lifetime of the process. The UI root holds this
//! and hands the services (or read-only views of them) to its screens;
//! nothing here is an ambient singleton.

use std::sync::Arc;

use crate::application::services::{CatalogLoader, ThemePreferenceStore};
use crate::infrastructure::assets::DirAssets;
use crate::infrastructure::preferences::JsonFilePreferences;
use crate::shared::config::AppConfig;

/// Application composition root - owns all dependencies
pub struct CompositionRoot {
    /// Observable theme preference
    pub theme: Arc<ThemePreferenceStore>,
    /// Observable catalog load state
    pub catalog: Arc<CatalogLoader>,
}

impl CompositionRoot {
    /// Create a composition root from discovered configuration
    pub fn new() -> Self {
        Self::with_config(AppConfig::load())
    }

    /// Create with explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        let preferences = Arc::new(JsonFilePreferences::new(config.preferences_path()));
        let assets = Arc::new(DirAssets::new(config.assets_dir()));

        let theme = Arc::new(ThemePreferenceStore::new(preferences));
        let catalog = Arc::new(CatalogLoader::new(assets, config.catalog.asset_name.clone()));
        if config.catalog.default_category != "All" {
            catalog.set_category_filter(config.catalog.default_category.clone());
        }

        Self { theme, catalog }
    }

    /// Restore persisted state and start the first catalog load.
    /// Call exactly once after construction.
    pub async fn startup(&self) {
        self.theme.initialize().await;
        self.catalog.load().await;
    }

    /// Drop all observer subscriptions on teardown
    pub fn shutdown(&self) {
        self.theme.shutdown();
        self.catalog.shutdown();
    }
}

impl Default for CompositionRoot {
    fn default() -> Self {
        Self::new()
    }
}
