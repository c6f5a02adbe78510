//! # Infrastructure Layer
//!
//! Concrete implementations of the repository and service traits defined in
//! `gt_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool and repositories using SQLx
//! - **Services**: the in-process fixed-window rate limiter
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Services module - Infrastructure service implementations
pub mod services;

#[cfg(feature = "mysql")]
pub use database::{DatabasePool, MySqlTicketRepository, MySqlUserRepository};
pub use services::rate_limit::InMemoryRateLimiter;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
