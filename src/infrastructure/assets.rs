//! DirAssets - filesystem-backed asset source
//!
//! Serves bundled assets from a directory, the way the packaged app
//! ships its `assets/` folder next to the executable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::application::ports::AssetPort;
use crate::domain::errors::AssetError;

/// Asset source reading named files from a base directory
pub struct DirAssets {
    base_dir: PathBuf,
}

impl DirAssets {
    /// Create a source rooted at the given directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// The directory assets are read from
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

#[async_trait]
impl AssetPort for DirAssets {
    async fn read_string(&self, name: &str) -> Result<String, AssetError> {
        // Asset names are plain file names, never paths
        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(AssetError::NotFound(name.to_string()));
        }
        let path = self.base_dir.join(name);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(AssetError::NotFound(name.to_string()))
            }
            Err(err) => Err(AssetError::Io(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_named_file() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("products.json"), r#"{"products": []}"#)
            .await
            .unwrap();

        let assets = DirAssets::new(dir.path());
        let text = assets.read_string("products.json").await.unwrap();
        assert_eq!(text, r#"{"products": []}"#);
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirAssets::new(dir.path());
        let err = assets.read_string("products.json").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_rejects_path_names() {
        let dir = tempfile::tempdir().unwrap();
        let assets = DirAssets::new(dir.path());
        for name in ["../secrets.json", "a/b.json", "a\\b.json"] {
            let err = assets.read_string(name).await.unwrap_err();
            assert!(matches!(err, AssetError::NotFound(_)));
        }
    }
}
