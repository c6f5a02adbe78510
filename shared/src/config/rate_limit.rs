//! Rate limiting configuration module

use serde::{Deserialize, Serialize};

use super::parse_or;

/// A fixed-window limit: at most `max_requests` per `window_seconds`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct WindowLimit {
    /// Requests admitted per window
    pub max_requests: u32,

    /// Window length in seconds
    pub window_seconds: u64,
}

impl WindowLimit {
    pub fn new(max_requests: u32, window_seconds: u64) -> Self {
        Self {
            max_requests,
            window_seconds,
        }
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Enable rate limiting
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Limit applied to every request
    pub general: WindowLimit,

    /// Stricter limit applied to the authentication endpoints
    pub auth: WindowLimit,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            general: WindowLimit::new(100, 60),
            auth: WindowLimit::new(5, 60),
        }
    }
}

impl RateLimitConfig {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            enabled: parse_or(lookup, "RATE_LIMIT_ENABLED", defaults.enabled),
            general: WindowLimit::new(
                parse_or(lookup, "RATE_LIMIT_GENERAL_MAX", defaults.general.max_requests),
                parse_or(lookup, "RATE_LIMIT_GENERAL_WINDOW_SECS", defaults.general.window_seconds),
            ),
            auth: WindowLimit::new(
                parse_or(lookup, "RATE_LIMIT_AUTH_MAX", defaults.auth.max_requests),
                parse_or(lookup, "RATE_LIMIT_AUTH_WINDOW_SECS", defaults.auth.window_seconds),
            ),
        }
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_defaults() {
        let config = RateLimitConfig::default();
        assert!(config.enabled);
        assert_eq!(config.general, WindowLimit::new(100, 60));
        assert_eq!(config.auth, WindowLimit::new(5, 60));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let lookup = |key: &str| match key {
            "RATE_LIMIT_ENABLED" => Some("false".to_string()),
            "RATE_LIMIT_AUTH_MAX" => Some("10".to_string()),
            "RATE_LIMIT_AUTH_WINDOW_SECS" => Some("300".to_string()),
            _ => None,
        };
        let config = RateLimitConfig::from_lookup(&lookup);

        assert!(!config.enabled);
        assert_eq!(config.auth, WindowLimit::new(10, 300));
        assert_eq!(config.general, WindowLimit::new(100, 60));
    }
}
