//! Application Layer - Services and Port Boundaries
//!
//! This layer orchestrates domain types and defines the application's
//! workflows. It contains:
//! - **Ports**: Interfaces for external collaborators (persistence, assets)
//! - **Services**: The observable state components the UI consumes
//!
//! # Clean Architecture Rules
//! - Depends only on the domain layer
//! - Defines ports that infrastructure implements
//! - Contains no framework-specific code

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
