//! # GovTech Core
//!
//! Core business logic and domain layer for the GovTech backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and the error taxonomy that the HTTP layer maps to status codes.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
