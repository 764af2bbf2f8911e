//! CatalogLoadState - tagged load-state machine for the catalog
//!
//! Exactly one variant holds at any time. The rendering layer matches
//! exhaustively on this instead of juggling loading/error booleans.

use crate::domain::entities::CatalogItem;

/// State of the current (or most recent) catalog load attempt
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogLoadState {
    /// A load is in flight; any previously loaded items are discarded
    Loading,
    /// The catalog loaded and decoded successfully
    Loaded(Vec<CatalogItem>),
    /// The load failed; the message is the human-readable cause
    Failed(String),
}

impl CatalogLoadState {
    /// Whether a load is currently in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogLoadState::Loading)
    }

    /// The loaded items, if any
    pub fn items(&self) -> Option<&[CatalogItem]> {
        match self {
            CatalogLoadState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    /// The failure message, if the load failed
    pub fn error_message(&self) -> Option<&str> {
        match self {
            CatalogLoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl Default for CatalogLoadState {
    fn default() -> Self {
        CatalogLoadState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::Price;

    #[test]
    fn test_default_is_loading() {
        assert!(CatalogLoadState::default().is_loading());
    }

    #[test]
    fn test_accessors() {
        let loaded = CatalogLoadState::Loaded(vec![CatalogItem::new(1, "A", Price::Free)]);
        assert_eq!(loaded.items().map(|items| items.len()), Some(1));
        assert!(loaded.error_message().is_none());

        let failed = CatalogLoadState::Failed("boom".to_string());
        assert_eq!(failed.error_message(), Some("boom"));
        assert!(failed.items().is_none());
    }
}
