//! CatalogDecoder - decodes the bundled catalog document
//!
//! Turns raw catalog text into typed `CatalogItem` records. The decode
//! distinguishes three failure classes: not JSON at all (`Parse`), JSON
//! without the recognized `products` array (`Schema`), and records that
//! violate the catalog invariants (`Item`). An empty `products` array is
//! a valid, intentionally empty catalog.

use std::collections::HashSet;

use serde::Deserialize;

use crate::domain::entities::CatalogItem;
use crate::domain::errors::CatalogError;
use crate::domain::value_objects::{Price, DEFAULT_CATEGORY};

/// Top-level key the catalog document must carry
const PRODUCTS_KEY: &str = "products";

/// Raw item record as it appears in the JSON document.
/// Unrecognized fields are ignored; optional fields decode to None.
#[derive(Debug, Deserialize)]
struct RawItem {
    id: i64,
    name: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    price: Option<f64>,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    students: Option<u64>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    instructor: Option<String>,
    #[serde(default)]
    duration: Option<String>,
}

/// Stateless decoder for catalog documents
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogDecoder;

impl CatalogDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        CatalogDecoder
    }

    /// Decode a full catalog document into validated items
    pub fn decode(&self, text: &str) -> Result<Vec<CatalogItem>, CatalogError> {
        // 1. Syntax: must be a JSON document
        let document: serde_json::Value =
            serde_json::from_str(text).map_err(|e| CatalogError::Parse(e.to_string()))?;

        // 2. Schema: a top-level object carrying the products array.
        //    A missing key is malformed data, not an empty catalog.
        let records = document
            .as_object()
            .and_then(|object| object.get(PRODUCTS_KEY))
            .ok_or_else(|| {
                CatalogError::Schema(format!("missing top-level `{}` key", PRODUCTS_KEY))
            })?;
        let records = records.as_array().ok_or_else(|| {
            CatalogError::Schema(format!("`{}` is not an array", PRODUCTS_KEY))
        })?;

        // 3. Records: decode and validate each item
        let mut items = Vec::with_capacity(records.len());
        let mut seen_ids = HashSet::new();
        for record in records {
            let raw: RawItem = serde_json::from_value(record.clone())
                .map_err(|e| CatalogError::Item(e.to_string()))?;
            items.push(self.validate(raw, &mut seen_ids)?);
        }
        Ok(items)
    }

    fn validate(
        &self,
        raw: RawItem,
        seen_ids: &mut HashSet<u64>,
    ) -> Result<CatalogItem, CatalogError> {
        if raw.id <= 0 {
            return Err(CatalogError::Item(format!("id {} is not positive", raw.id)));
        }
        let id = raw.id as u64;
        if !seen_ids.insert(id) {
            return Err(CatalogError::Item(format!("duplicate id {}", id)));
        }
        if raw.name.trim().is_empty() {
            return Err(CatalogError::Item(format!("item {} has an empty name", id)));
        }
        let price = Price::from_raw(raw.price)
            .map_err(|amount| CatalogError::Item(format!("item {} has negative price {}", id, amount)))?;

        Ok(CatalogItem {
            id,
            name: raw.name,
            category: raw.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            price,
            rating: raw.rating,
            students: raw.students,
            description: raw.description,
            instructor: raw.instructor,
            duration: raw.duration,
        })
    }
}
