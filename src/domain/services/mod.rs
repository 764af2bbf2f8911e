//! Domain Services - Stateless domain logic
//!
//! Operations that belong to the domain but fit no single entity.

pub mod catalog_decoder;

pub use catalog_decoder::CatalogDecoder;
