//! Ticket service module
//!
//! Citizen submission and tracking of infrastructure tickets, and the
//! administrator review workflow.

mod service;


pub use service::{parse_ticket_id, TicketService};
