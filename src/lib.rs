//! UNI-VENTS application state core
//!
//! The testable heart of the UNI-VENTS campus listings app: an
//! observable light/dark theme preference persisted through a key-value
//! port, and a catalog loader that drives a Loading/Loaded/Failed state
//! machine over a bundled JSON catalog with category filtering. The UI
//! layer subscribes to both and renders from their state; it never
//! mutates them except through the documented operations.
//!
//! Construction is explicit: build a [`CompositionRoot`] (or wire the
//! services yourself with custom port implementations), call
//! `startup().await` once, and pass the services down to the screens.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use application::ports::{AssetPort, MemoryPreferences, PreferencePort, StaticAssets};
pub use application::services::{CatalogLoader, ThemePreferenceStore};
pub use domain::entities::{CatalogItem, CatalogItemId, CatalogLoadState, ThemeMode};
pub use domain::errors::{AssetError, CatalogError, PreferenceError};
pub use domain::value_objects::{CategoryFilter, Price};
pub use infrastructure::{CompositionRoot, DirAssets, JsonFilePreferences};
pub use shared::config::AppConfig;
pub use shared::subscription::SubscriptionId;
