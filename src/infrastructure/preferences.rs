//! JsonFilePreferences - filesystem-backed preference store
//!
//! Persists the preference map as a single JSON object in one file,
//! read and rewritten whole on each access. The map is tiny (one key
//! today), so whole-file rewrites are fine.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::warn;

use crate::application::ports::PreferencePort;
use crate::domain::errors::PreferenceError;

/// Preference store backed by a JSON file
pub struct JsonFilePreferences {
    path: PathBuf,
}

impl JsonFilePreferences {
    /// Create a store backed by the given file; the file and its parent
    /// directory are created lazily on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default location under the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("univents")
            .join("preferences.json")
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> Result<HashMap<String, String>, PreferenceError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => {
                serde_json::from_str(&text).map_err(|e| PreferenceError::Read(e.to_string()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(PreferenceError::Read(err.to_string())),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| PreferenceError::Write(e.to_string()))?;
        }
        let text = serde_json::to_string_pretty(map)
            .map_err(|e| PreferenceError::Write(e.to_string()))?;
        tokio::fs::write(&self.path, text)
            .await
            .map_err(|e| PreferenceError::Write(e.to_string()))
    }
}

#[async_trait]
impl PreferencePort for JsonFilePreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_map().await?.get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        // A corrupt file should not brick writes; start over from empty
        let mut map = match self.read_map().await {
            Ok(map) => map,
            Err(err) => {
                warn!("preference file unreadable, rewriting: {err}");
                HashMap::new()
            }
        };
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }
}
