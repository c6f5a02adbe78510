//! Value objects representing immutable domain concepts.

pub mod auth_response;
pub mod identity;

// Re-export commonly used types
pub use auth_response::LoginResult;
pub use identity::Identity;
