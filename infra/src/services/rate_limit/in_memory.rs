//! Fixed-window request counter kept in process memory.
//!
//! Counters are per process: separate server instances each keep their own
//! table, so the effective limit scales with the number of instances.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use gt_core::services::clock::{Clock, SystemClock};
use gt_core::services::rate_limit::{RateLimitDecision, RateLimiterTrait};
use gt_shared::WindowLimit;

#[derive(Debug, Clone, Copy)]
struct Window {
    count: u32,
    reset_at: DateTime<Utc>,
}

/// Per-key fixed-window limiter
///
/// A key's window opens on its first request and admits `max_requests`
/// requests until `window_seconds` have elapsed; the next request after
/// that opens a fresh window.
pub struct InMemoryRateLimiter {
    /// Label used in logs ("general", "auth")
    name: String,
    limit: WindowLimit,
    clock: Arc<dyn Clock>,
    windows: Mutex<HashMap<String, Window>>,
}

impl InMemoryRateLimiter {
    /// Create a limiter reading the system clock
    pub fn new(name: impl Into<String>, limit: WindowLimit) -> Self {
        Self::with_clock(name, limit, Arc::new(SystemClock))
    }

    /// Create a limiter with an injected clock
    pub fn with_clock(name: impl Into<String>, limit: WindowLimit, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            limit,
            clock,
            windows: Mutex::new(HashMap::new()),
        }
    }

    pub fn limit(&self) -> WindowLimit {
        self.limit
    }

    fn window_length(&self) -> Duration {
        Duration::seconds(self.limit.window_seconds as i64)
    }

    /// Drops every window that has already expired
    ///
    /// # Returns
    ///
    /// The number of windows removed
    pub async fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut windows = self.windows.lock().await;
        let before = windows.len();
        windows.retain(|_, window| window.reset_at > now);
        let removed = before - windows.len();
        if removed > 0 {
            debug!(limiter = %self.name, removed, "swept expired rate limit windows");
        }
        removed
    }

    /// Number of keys currently tracked
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }

    /// Spawns a task that sweeps every `interval`, or every window length
    /// when `interval` is `None`
    pub fn spawn_sweeper(self: Arc<Self>, interval: Option<std::time::Duration>) -> JoinHandle<()> {
        let interval =
            interval.unwrap_or_else(|| std::time::Duration::from_secs(self.limit.window_seconds.max(1)));

        tokio::spawn(async move {
            info!(
                "Rate limit sweeper '{}' started - will run every {} seconds",
                self.name,
                interval.as_secs()
            );

            let mut interval_timer = tokio::time::interval(interval);
            // The first tick completes immediately
            interval_timer.tick().await;

            loop {
                interval_timer.tick().await;
                self.sweep().await;
            }
        })
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn check(&self, key: &str) -> RateLimitDecision {
        let now = self.clock.now();
        let max = self.limit.max_requests;
        let mut windows = self.windows.lock().await;

        match windows.get_mut(key) {
            Some(window) if window.reset_at > now => {
                if window.count >= max {
                    warn!(
                        limiter = %self.name,
                        client = %key,
                        reset_at = %window.reset_at.to_rfc3339(),
                        "rate limit exceeded"
                    );
                    return RateLimitDecision {
                        allowed: false,
                        limit: max,
                        remaining: 0,
                        reset_at: window.reset_at,
                    };
                }
                window.count += 1;
                RateLimitDecision {
                    allowed: true,
                    limit: max,
                    remaining: max - window.count,
                    reset_at: window.reset_at,
                }
            }
            _ => {
                let window = Window {
                    count: 1,
                    reset_at: now + self.window_length(),
                };
                windows.insert(key.to_string(), window);
                RateLimitDecision {
                    allowed: max >= 1,
                    limit: max,
                    remaining: max.saturating_sub(1),
                    reset_at: window.reset_at,
                }
            }
        }
    }

    fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
