//! Domain Entities - Core business objects
//!
//! Entities are objects with a distinct identity that persists over time.
//! They represent the core business concepts of the application.

pub mod catalog_item;
pub mod catalog_state;
pub mod theme_mode;

pub use catalog_item::{CatalogItem, CatalogItemId};
pub use catalog_state::CatalogLoadState;
pub use theme_mode::ThemeMode;
