//! bcrypt hashing on the blocking pool.

use crate::errors::DomainError;

/// Hashes `password` with bcrypt at `cost`
pub async fn hash_password(password: String, cost: u32) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| DomainError::internal(format!("hashing task failed: {}", e)))?
        .map_err(|e| DomainError::internal(format!("bcrypt hash failed: {}", e)))
}

/// Checks `password` against a stored bcrypt hash
///
/// A malformed stored hash is reported as a mismatch.
pub async fn verify_password(password: String, hash: String) -> Result<bool, DomainError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
        .await
        .map_err(|e| DomainError::internal(format!("verification task failed: {}", e)))
}
