//! MySQL-specific database implementations
//!
//! This module contains MySQL implementations of repository traits
//! using SQLx for database operations.

pub mod ticket_repository_impl;
pub mod user_repository_impl;

// Re-export the MySQL implementations
pub use ticket_repository_impl::MySqlTicketRepository;
pub use user_repository_impl::MySqlUserRepository;

use gt_core::errors::DomainError;
use sqlx::mysql::MySqlDatabaseError;

/// MySQL error number for a unique key violation
const ER_DUP_ENTRY: u16 = 1062;

/// Whether `error` is a unique key violation
pub(crate) fn is_duplicate_entry(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db_error) => db_error
            .try_downcast_ref::<MySqlDatabaseError>()
            .map(|e| e.number() == ER_DUP_ENTRY)
            .unwrap_or(false),
        _ => false,
    }
}

pub(crate) fn query_failed(error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Database query failed: {}", error))
}

pub(crate) fn column_error(column: &str, error: sqlx::Error) -> DomainError {
    DomainError::internal(format!("Failed to get {}: {}", column, error))
}
