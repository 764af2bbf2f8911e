//! Domain layer error types
//!
//! All errors that can occur in domain layer operations. None of these
//! are fatal: preference errors are recovered or surfaced as warnings,
//! and catalog errors collapse into the `Failed` load state.

use thiserror::Error;

/// Errors from the key-value preference collaborator
#[derive(Error, Debug)]
pub enum PreferenceError {
    /// Persisted value could not be read; callers default to Light
    #[error("preference read failed: {0}")]
    Read(String),

    /// New value could not be persisted; the in-memory state still changed
    #[error("preference write failed: {0}")]
    Write(String),
}

/// Errors from the asset-read collaborator
#[derive(Error, Debug)]
pub enum AssetError {
    /// Named asset does not exist
    #[error("asset not found: {0}")]
    NotFound(String),

    /// Asset exists but could not be read
    #[error("asset read failed: {0}")]
    Io(String),
}

/// Errors while loading and decoding the catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The asset could not be read at all
    #[error("catalog read failed: {0}")]
    Read(String),

    /// The asset text is not valid JSON
    #[error("catalog parse failed: {0}")]
    Parse(String),

    /// The JSON is valid but lacks the recognized top-level structure
    #[error("invalid catalog structure: {0}")]
    Schema(String),

    /// An item record violates the catalog invariants
    #[error("invalid catalog item: {0}")]
    Item(String),
}

impl From<AssetError> for CatalogError {
    fn from(err: AssetError) -> Self {
        CatalogError::Read(err.to_string())
    }
}

impl From<std::io::Error> for AssetError {
    fn from(err: std::io::Error) -> Self {
        AssetError::Io(err.to_string())
    }
}
