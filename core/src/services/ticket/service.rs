//! Main ticket service implementation

use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::domain::entities::ticket::{NewTicket, Ticket, TicketStatus, TicketWithOwner};
use crate::domain::entities::user::Role;
use crate::domain::value_objects::Identity;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TicketRepository;
use crate::services::auth::require_role;
use crate::services::clock::Clock;

const TICKET: &str = "Chamado";

/// Parses a protocol number; anything that is not a UUID is simply unknown
pub fn parse_ticket_id(raw: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| DomainError::not_found(TICKET))
}

/// Service for ticket submission, lookup and review
pub struct TicketService<T>
where
    T: TicketRepository,
{
    /// Ticket repository for database operations
    ticket_repository: Arc<T>,
    /// Time source for creation and update timestamps
    clock: Arc<dyn Clock>,
}

impl<T> TicketService<T>
where
    T: TicketRepository,
{
    pub fn new(ticket_repository: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            ticket_repository,
            clock,
        }
    }

    /// Submit a new ticket owned by the caller
    ///
    /// # Errors
    ///
    /// `Validation` when category, description or address are too short
    pub async fn create_ticket(&self, owner: &Identity, input: NewTicket) -> DomainResult<Ticket> {
        let input = input.validated()?;
        let ticket = Ticket::new(owner.user_id, input, self.clock.now());
        let ticket = self.ticket_repository.create(ticket).await?;

        info!(
            ticket_id = %ticket.id,
            user_id = %owner.user_id,
            category = %ticket.category,
            "ticket created"
        );
        Ok(ticket)
    }

    /// Look a ticket up by protocol number
    ///
    /// Open to any caller: knowing the protocol is enough to read it.
    pub async fn get_ticket(&self, id: &str) -> DomainResult<Ticket> {
        let id = parse_ticket_id(id)?;
        self.ticket_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(TICKET))
    }

    /// The caller's own tickets, newest first
    pub async fn list_own_tickets(&self, owner: &Identity) -> DomainResult<Vec<Ticket>> {
        let tickets = self.ticket_repository.list_by_owner(owner.user_id).await?;
        debug!(user_id = %owner.user_id, count = tickets.len(), "listed own tickets");
        Ok(tickets)
    }

    /// Every ticket with its owner's contact, newest first (administrators only)
    pub async fn list_all_tickets(&self, admin: &Identity) -> DomainResult<Vec<TicketWithOwner>> {
        require_role(admin, Role::Admin)?;
        self.ticket_repository.list_all_with_owner().await
    }

    /// Move a ticket to `status` (administrators only)
    ///
    /// Every transition is allowed, including to the current status.
    pub async fn set_status(
        &self,
        admin: &Identity,
        id: &str,
        status: TicketStatus,
    ) -> DomainResult<Ticket> {
        require_role(admin, Role::Admin)?;
        let id = parse_ticket_id(id)?;

        let ticket = self
            .ticket_repository
            .update_status(id, status, self.clock.now())
            .await?
            .ok_or_else(|| DomainError::not_found(TICKET))?;

        info!(ticket_id = %ticket.id, admin_id = %admin.user_id, status = %status, "ticket status updated");
        Ok(ticket)
    }
}
