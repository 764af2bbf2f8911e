//! PreferencePort - interface for key-value preference persistence
//!
//! This port defines the asynchronous key-value store the theme
//! preference is persisted to.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::errors::PreferenceError;

/// Port interface for asynchronous key-value persistence
#[async_trait]
pub trait PreferencePort: Send + Sync {
    /// Read a stored string, or None if the key was never written
    async fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store a string under a key
    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preference store for testing and ephemeral use
#[derive(Default)]
pub struct MemoryPreferences {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    write_count: AtomicUsize,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail (for failure-path tests)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PreferencePort for MemoryPreferences {
    async fn get_string(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.lock().get(key).cloned())
    }

    async fn set_string(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PreferenceError::Write("simulated write failure".to_string()));
        }
        self.values.lock().insert(key.to_string(), value.to_string());
        self.write_count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_round_trip() {
        let prefs = MemoryPreferences::new();
        assert_eq!(prefs.get_string("theme_mode").await.unwrap(), None);
        prefs.set_string("theme_mode", "dark").await.unwrap();
        assert_eq!(
            prefs.get_string("theme_mode").await.unwrap(),
            Some("dark".to_string())
        );
        assert_eq!(prefs.write_count(), 1);
    }

    #[tokio::test]
    async fn test_memory_failure_injection() {
        let prefs = MemoryPreferences::new();
        prefs.set_fail_writes(true);
        let err = prefs.set_string("theme_mode", "dark").await.unwrap_err();
        assert!(matches!(err, PreferenceError::Write(_)));
        assert_eq!(prefs.write_count(), 0);
    }
}
