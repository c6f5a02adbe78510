//! HTTP route handlers
//!
//! Handlers are thin: they decode the request, call one service operation
//! and shape the JSON envelope. Status codes for failures are decided in
//! [`crate::handlers::error`].

pub mod admin;
pub mod auth;
pub mod health;
pub mod index;
pub mod tickets;
