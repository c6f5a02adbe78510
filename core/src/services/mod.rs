//! Business services containing domain logic and use cases.

pub mod auth;
pub mod clock;
pub mod rate_limit;
pub mod ticket;
pub mod token;

// Re-export commonly used types
pub use auth::{require_role, AuthService, AuthServiceConfig, EnsureAdminOutcome};
pub use clock::{Clock, SystemClock};
pub use rate_limit::{RateLimitDecision, RateLimiterTrait};
pub use ticket::{parse_ticket_id, TicketService};
pub use token::{TokenService, TokenServiceConfig};

#[cfg(any(test, feature = "testing"))]
pub use clock::ManualClock;
