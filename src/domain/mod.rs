//! Domain Layer - Core business types
//!
//! Entities, value objects, domain services, and error types. This
//! layer has no knowledge of persistence, assets, or the UI.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
