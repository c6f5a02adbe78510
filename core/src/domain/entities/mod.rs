//! Domain entities representing core business objects.

pub mod ticket;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use ticket::{NewTicket, Ticket, TicketOwner, TicketStatus, TicketWithOwner};
pub use token::Claims;
pub use user::{Role, User, UserSummary};
