//! Authentication service module
//!
//! This module provides the account and session flow:
//! - Citizen registration with bcrypt password hashing
//! - Email/password login issuing a signed session token
//! - Token authentication and role checks
//! - Administrator seeding

mod config;
mod password;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::{require_role, AuthService, EnsureAdminOutcome};
