//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `rate_limit` - Fixed-window limits for general and authentication traffic
//! - `server` - HTTP server and CORS configuration
//!
//! Every section is read through a key lookup function so tests can feed a
//! plain map instead of mutating the process environment.

pub mod auth;
pub mod database;
pub mod environment;
pub mod rate_limit;
pub mod server;

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// Re-export commonly used types
pub use auth::{AuthConfig, DEFAULT_JWT_SECRET};
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use rate_limit::{RateLimitConfig, WindowLimit};
pub use server::ServerConfig;

/// Cost range bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Configuration validation failure
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be changed in production")]
    DefaultJwtSecretInProduction,

    #[error("{key} must be greater than zero")]
    ZeroValue { key: &'static str },

    #[error("BCRYPT_COST must be between {min} and {max}, got {value}")]
    BcryptCostOutOfRange { value: u32, min: u32, max: u32 },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Rate limiting configuration
    pub rate_limit: RateLimitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: Environment::from_lookup(&lookup),
            server: ServerConfig::from_lookup(&lookup),
            database: DatabaseConfig::from_lookup(&lookup),
            auth: AuthConfig::from_lookup(&lookup),
            rate_limit: RateLimitConfig::from_lookup(&lookup),
        }
    }

    /// Reject settings the process must not start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.environment.is_production() && self.auth.is_using_default_secret() {
            return Err(ConfigError::DefaultJwtSecretInProduction);
        }
        if self.auth.token_expiry_seconds <= 0 {
            return Err(ConfigError::ZeroValue { key: "JWT_EXPIRY_SECONDS" });
        }
        if self.rate_limit.general.max_requests == 0 {
            return Err(ConfigError::ZeroValue { key: "RATE_LIMIT_GENERAL_MAX" });
        }
        if self.rate_limit.general.window_seconds == 0 {
            return Err(ConfigError::ZeroValue { key: "RATE_LIMIT_GENERAL_WINDOW_SECS" });
        }
        if self.rate_limit.auth.max_requests == 0 {
            return Err(ConfigError::ZeroValue { key: "RATE_LIMIT_AUTH_MAX" });
        }
        if self.rate_limit.auth.window_seconds == 0 {
            return Err(ConfigError::ZeroValue { key: "RATE_LIMIT_AUTH_WINDOW_SECS" });
        }
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.auth.bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange {
                value: self.auth.bcrypt_cost,
                min: MIN_BCRYPT_COST,
                max: MAX_BCRYPT_COST,
            });
        }
        Ok(())
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Read and parse a key, falling back to `default` when absent or malformed
pub(crate) fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
