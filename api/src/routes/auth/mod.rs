//! Authentication route handlers
//!
//! - Citizen registration
//! - Email/password login

pub mod login;
pub mod register;

pub use login::login;
pub use register::register;
