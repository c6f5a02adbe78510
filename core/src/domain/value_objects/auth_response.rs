//! Login result value object for API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::UserSummary;

/// Result of a successful login
///
/// Carries the signed session token together with the public view of the
/// authenticated user. The token is the only credential: there is no
/// refresh token and no server-side session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResult {
    /// Signed JWT
    pub token: String,

    /// Token lifetime in seconds
    pub expires_in: i64,

    /// Absolute expiry
    pub expires_at: DateTime<Utc>,

    /// Authenticated user
    pub user: UserSummary,
}

impl LoginResult {
    pub fn new(token: String, expires_at: DateTime<Utc>, expires_in: i64, user: UserSummary) -> Self {
        Self {
            token,
            expires_in,
            expires_at,
            user,
        }
    }
}
