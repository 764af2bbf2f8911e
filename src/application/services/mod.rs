//! Application Services - Observable state components
//!
//! The two independent components the UI renders from: the theme
//! preference store and the catalog loader.

pub mod catalog_loader;
pub mod theme_preferences;

pub use catalog_loader::CatalogLoader;
pub use theme_preferences::{ThemePreferenceStore, THEME_MODE_KEY};
