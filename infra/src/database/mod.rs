//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management and health probing
//! - Repository implementations for users and tickets
//!
//! The schema is kept in `infra/migrations` and applied out of band.

pub mod connection;
pub mod mysql;


// Re-export commonly used types
pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{MySqlTicketRepository, MySqlUserRepository};
