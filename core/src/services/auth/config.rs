//! Configuration for the authentication service

use gt_shared::AuthConfig;

/// Minimum display name length, in characters
pub const MIN_NAME_CHARS: usize = 3;
/// Minimum password length, in characters
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// bcrypt work factor
    pub bcrypt_cost: u32,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AuthServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}
