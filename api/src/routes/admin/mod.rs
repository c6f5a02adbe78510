//! Administrator routes; mounted behind `JwtAuth` and `RequireRole::admin()`

pub mod list;
pub mod update_status;

pub use list::list_all_tickets;
pub use update_status::update_ticket_status;
