//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

use super::parse_or;

/// Fallback signing secret; refused in production
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// JWT and password hashing configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT secret key for signing tokens (HS256)
    #[serde(skip_serializing)]
    pub jwt_secret: String,

    /// Token lifetime in seconds. Role claims are trusted until expiry,
    /// so this bounds how long a demoted or removed user keeps access.
    pub token_expiry_seconds: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// bcrypt work factor
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from(DEFAULT_JWT_SECRET),
            token_expiry_seconds: 7200, // 2 hours
            issuer: String::from("govtech"),
            audience: String::from("govtech-api"),
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl AuthConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            jwt_secret: lookup("JWT_SECRET")
                .filter(|secret| !secret.is_empty())
                .unwrap_or(defaults.jwt_secret),
            token_expiry_seconds: parse_or(lookup, "JWT_EXPIRY_SECONDS", defaults.token_expiry_seconds),
            issuer: lookup("JWT_ISSUER").unwrap_or(defaults.issuer),
            audience: lookup("JWT_AUDIENCE").unwrap_or(defaults.audience),
            bcrypt_cost: parse_or(lookup, "BCRYPT_COST", defaults.bcrypt_cost),
        }
    }

    /// Create a configuration with a specific secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set token expiry in minutes
    pub fn with_expiry_minutes(mut self, minutes: i64) -> Self {
        self.token_expiry_seconds = minutes * 60;
        self
    }

    /// Set the bcrypt work factor
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn default_bcrypt_cost() -> u32 {
    12
}
