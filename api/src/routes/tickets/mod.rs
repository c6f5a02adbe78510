//! Citizen ticket routes

pub mod create;
pub mod get;
pub mod list_own;

pub use create::create_ticket;
pub use get::get_ticket;
pub use list_own::list_own_tickets;
