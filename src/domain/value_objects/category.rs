//! CategoryFilter value object
//!
//! The active category selection for the catalog view. `"All"` is the
//! distinguished filter that matches every item.

use std::fmt;

/// Category an item belongs to when the source data gives none
pub const DEFAULT_CATEGORY: &str = "General";

/// Active category filter for the catalog
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter(String);

impl CategoryFilter {
    /// The filter that matches every item
    pub fn all() -> Self {
        CategoryFilter("All".to_string())
    }

    /// A filter for a specific category name
    pub fn named(category: impl Into<String>) -> Self {
        CategoryFilter(category.into())
    }

    /// Whether this is the match-everything filter
    pub fn is_all(&self) -> bool {
        self.0 == "All"
    }

    /// Whether an item with the given category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        self.is_all() || self.0 == category
    }

    /// The selected category name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
