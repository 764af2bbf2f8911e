//! Application Ports - Interfaces for external collaborators
//!
//! The two suspension points of the core live behind these ports:
//! key-value persistence and bundled-asset reads.

pub mod asset_port;
pub mod preference_port;

pub use asset_port::{AssetPort, StaticAssets};
pub use preference_port::{MemoryPreferences, PreferencePort};
