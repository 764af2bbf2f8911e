//! Application Configuration
//!
//! Loaded from `univents.toml`, with every field optional and defaulted
//! so a missing file means a fully default configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration loaded from univents.toml
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// UNI-VENTS metadata section
    #[serde(default)]
    pub univents: UniventsMeta,

    /// Preference persistence configuration
    #[serde(default)]
    pub preferences: PreferencesConfig,

    /// Catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// UNI-VENTS metadata
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UniventsMeta {
    /// Config version for compatibility
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for UniventsMeta {
    fn default() -> Self {
        Self {
            version: default_version(),
        }
    }
}

fn default_version() -> String {
    "0.1".to_string()
}

/// Preference persistence configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PreferencesConfig {
    /// Preference file path override
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Catalog configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Asset directory override
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// Name of the bundled catalog asset
    #[serde(default = "default_catalog_asset")]
    pub asset_name: String,

    /// Category filter active at startup
    #[serde(default = "default_category_filter")]
    pub default_category: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            asset_name: default_catalog_asset(),
            default_category: default_category_filter(),
        }
    }
}

fn default_catalog_asset() -> String {
    "products.json".to_string()
}

fn default_category_filter() -> String {
    "All".to_string()
}

impl AppConfig {
    /// Find univents.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("univents").join("univents.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("univents.toml"))),
            Some(PathBuf::from("univents.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from file, returning defaults if not found
    pub fn load() -> Self {
        if let Some(path) = Self::find_config_path() {
            Self::load_from_path(&path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self, AppConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Effective preference file path
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences
            .path
            .clone()
            .unwrap_or_else(crate::infrastructure::JsonFilePreferences::default_path)
    }

    /// Effective asset directory
    pub fn assets_dir(&self) -> PathBuf {
        self.catalog
            .assets_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}

/// Configuration error
#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
