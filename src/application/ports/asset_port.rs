//! AssetPort - interface for reading bundled assets
//!
//! This port defines how the raw text of a named bundled resource
//! (e.g. `products.json`) is obtained.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::AssetError;

/// Port interface for asynchronous asset reads
#[async_trait]
pub trait AssetPort: Send + Sync {
    /// Read the full text content of a named asset
    async fn read_string(&self, name: &str) -> Result<String, AssetError>;
}

/// In-memory asset source for testing and embedded defaults
#[derive(Default)]
pub struct StaticAssets {
    assets: HashMap<String, String>,
}

impl StaticAssets {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named asset
    pub fn with_asset(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.assets.insert(name.into(), content.into());
        self
    }
}

#[async_trait]
impl AssetPort for StaticAssets {
    async fn read_string(&self, name: &str) -> Result<String, AssetError> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}
