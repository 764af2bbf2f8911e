//! Infrastructure Layer - Adapters and wiring
//!
//! Filesystem-backed implementations of the application ports, plus the
//! composition root that wires them into the services.

pub mod assets;
pub mod composition_root;
pub mod preferences;

pub use assets::DirAssets;
pub use composition_root::CompositionRoot;
pub use preferences::JsonFilePreferences;
