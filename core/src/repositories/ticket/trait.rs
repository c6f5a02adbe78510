//! Ticket repository trait defining the interface for ticket persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::ticket::{Ticket, TicketStatus, TicketWithOwner};
use crate::errors::DomainError;

/// Repository trait for Ticket entity persistence operations
///
/// Listings are ordered newest first by creation time. Implementations
/// never filter by caller; access rules live in the ticket service.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Persist a new ticket
    ///
    /// # Returns
    /// * `Ok(Ticket)` - The stored ticket
    /// * `Err(DomainError)` - Storage failed, e.g. the owner does not exist
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError>;

    /// Find a ticket by its protocol number
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError>;

    /// All tickets owned by `user_id`, newest first
    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError>;

    /// Every ticket joined with its owner's name and email, newest first
    async fn list_all_with_owner(&self) -> Result<Vec<TicketWithOwner>, DomainError>;

    /// Overwrite the status of a ticket
    ///
    /// # Returns
    /// * `Ok(Some(Ticket))` - The ticket after the update
    /// * `Ok(None)` - No ticket with that id
    /// * `Err(DomainError)` - Database error occurred
    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Ticket>, DomainError>;
}
