//! Fixed-window request limiting interface.
//!
//! The HTTP layer consults a limiter before dispatching each request; the
//! in-memory implementation lives in the infrastructure crate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Result of counting one request against a client's window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed
    pub allowed: bool,
    /// Maximum requests per window
    pub limit: u32,
    /// Requests left in the current window after this one
    pub remaining: u32,
    /// When the current window ends
    pub reset_at: DateTime<Utc>,
}

impl RateLimitDecision {
    /// Whole seconds until the window resets, never less than one
    pub fn retry_after_secs(&self, now: DateTime<Utc>) -> u64 {
        let millis = (self.reset_at - now).num_milliseconds().max(0) as u64;
        ((millis + 999) / 1000).max(1)
    }
}

/// Per-client request counter
#[async_trait]
pub trait RateLimiterTrait: Send + Sync {
    /// Counts one request for `key` and reports whether it is allowed
    ///
    /// Denied requests are not counted.
    async fn check(&self, key: &str) -> RateLimitDecision;

    /// Current time as seen by the limiter
    fn now(&self) -> DateTime<Utc>;
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn test_retry_after_rounds_up() {
        let now = Utc::now();
        let decision = RateLimitDecision {
            allowed: false,
            limit: 5,
            remaining: 0,
            reset_at: now + Duration::milliseconds(1500),
        };
        assert_eq!(decision.retry_after_secs(now), 2);
        assert_eq!(decision.retry_after_secs(now + Duration::seconds(10)), 1);
    }
}
