//! Token service module for JWT management
//!
//! Issues and verifies the HS256 session tokens that carry a caller's
//! identity and role. Tokens are stateless: there is no revocation list.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
