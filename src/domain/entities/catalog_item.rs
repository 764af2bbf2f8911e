//! CatalogItem entity - one listing in the bundled catalog
//!
//! Items are decoded once at the load boundary and carried as typed
//! records from then on; downstream code never sees raw JSON maps.

use crate::domain::value_objects::{Price, DEFAULT_CATEGORY};

/// Unique identifier of a catalog item (positive, unique within a load)
pub type CatalogItemId = u64;

/// One listing from the bundled catalog
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    /// Unique identifier
    pub id: CatalogItemId,
    /// Display name, never empty
    pub name: String,
    /// Category, `"General"` when the source data gave none
    pub category: String,
    /// Price with the free/unknown distinction preserved
    pub price: Price,
    /// Average rating
    pub rating: Option<f64>,
    /// Enrolled-student or attendee count
    pub students: Option<u64>,
    /// Longer description text
    pub description: Option<String>,
    /// Instructor or organizer name
    pub instructor: Option<String>,
    /// Human-readable duration label (e.g. "6 weeks")
    pub duration: Option<String>,
}

impl CatalogItem {
    /// Create an item with only the required fields
    pub fn new(id: CatalogItemId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            category: DEFAULT_CATEGORY.to_string(),
            price,
            rating: None,
            students: None,
            description: None,
            instructor: None,
            duration: None,
        }
    }

    /// Builder-style category override
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_category_to_general() {
        let item = CatalogItem::new(1, "Intro to Rust", Price::Free);
        assert_eq!(item.category, "General");
        assert!(item.rating.is_none());
    }

    #[test]
    fn test_with_category() {
        let item = CatalogItem::new(2, "Watercolors", Price::Paid(500.0))
            .with_category("Arts");
        assert_eq!(item.category, "Arts");
    }
}
