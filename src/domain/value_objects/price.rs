//! Price value object
//!
//! Distinguishes "free" (an explicit zero in the catalog data) from
//! "price unknown" (the field was absent). Downstream code must never
//! conflate the two, so this is a tagged value rather than an Option.

use std::fmt;

/// Price of a catalog item
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Price {
    /// Explicit zero in the source data
    Free,
    /// Positive amount
    Paid(f64),
    /// Field absent in the source data
    Unknown,
}

impl Price {
    /// Build from a raw optional amount. `None` is unknown, zero is free.
    /// Negative amounts are invalid catalog data.
    pub fn from_raw(raw: Option<f64>) -> Result<Self, f64> {
        match raw {
            None => Ok(Price::Unknown),
            Some(amount) if amount == 0.0 => Ok(Price::Free),
            Some(amount) if amount > 0.0 => Ok(Price::Paid(amount)),
            Some(amount) => Err(amount),
        }
    }

    /// Whether the item costs nothing (explicitly, not merely unpriced)
    pub fn is_free(&self) -> bool {
        matches!(self, Price::Free)
    }

    /// The amount, if one was given
    pub fn amount(&self) -> Option<f64> {
        match self {
            Price::Free => Some(0.0),
            Price::Paid(amount) => Some(*amount),
            Price::Unknown => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Free => write!(f, "Free"),
            Price::Paid(amount) => write!(f, "{:.2}", amount),
            Price::Unknown => write!(f, "Unknown"),
        }
    }
}
