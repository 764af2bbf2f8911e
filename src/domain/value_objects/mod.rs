//! Domain Value Objects - Immutable values that describe characteristics
//!
//! Value objects have no identity and are compared by their values.
//! They are immutable and can be freely shared.

pub mod category;
pub mod price;

pub use category::{CategoryFilter, DEFAULT_CATEGORY};
pub use price::Price;
