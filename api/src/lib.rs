//! HTTP layer of the GovTech issue reporting service
//!
//! Exposes the application factory so the binary and the integration tests
//! build the exact same route and middleware stack.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppState, RateLimiters};
