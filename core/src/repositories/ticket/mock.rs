//! Mock implementation of TicketRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::ticket::{Ticket, TicketOwner, TicketStatus, TicketWithOwner};
use crate::errors::DomainError;
use crate::repositories::user::{MockUserRepository, UserRepository};

use super::trait_::TicketRepository;

/// Mock ticket repository for testing
///
/// Backed by a [`MockUserRepository`] so that owner checks and the admin
/// join behave like the foreign key in the real schema.
#[derive(Clone)]
pub struct MockTicketRepository {
    tickets: Arc<RwLock<HashMap<Uuid, Ticket>>>,
    users: MockUserRepository,
}

impl MockTicketRepository {
    /// Create a new mock repository resolving owners through `users`
    pub fn new(users: MockUserRepository) -> Self {
        Self {
            tickets: Arc::new(RwLock::new(HashMap::new())),
            users,
        }
    }

    /// Number of stored tickets
    pub async fn len(&self) -> usize {
        self.tickets.read().await.len()
    }
}

fn newest_first(a: &Ticket, b: &Ticket) -> std::cmp::Ordering {
    b.created_at.cmp(&a.created_at)
}

#[async_trait]
impl TicketRepository for MockTicketRepository {
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        if self.users.find_by_id(ticket.user_id).await?.is_none() {
            return Err(DomainError::internal("ticket owner does not exist"));
        }

        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.id, ticket.clone());
        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.get(&id).cloned())
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError> {
        let tickets = self.tickets.read().await;
        let mut owned: Vec<Ticket> = tickets
            .values()
            .filter(|t| t.user_id == user_id)
            .cloned()
            .collect();
        owned.sort_by(newest_first);
        Ok(owned)
    }

    async fn list_all_with_owner(&self) -> Result<Vec<TicketWithOwner>, DomainError> {
        let mut all: Vec<Ticket> = self.tickets.read().await.values().cloned().collect();
        all.sort_by(newest_first);

        let mut joined = Vec::with_capacity(all.len());
        for ticket in all {
            if let Some(owner) = self.users.find_by_id(ticket.user_id).await? {
                joined.push(TicketWithOwner {
                    ticket,
                    user: TicketOwner {
                        name: owner.name,
                        email: owner.email,
                    },
                });
            }
        }
        Ok(joined)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Ticket>, DomainError> {
        let mut tickets = self.tickets.write().await;
        Ok(tickets.get_mut(&id).map(|ticket| {
            ticket.set_status(status, updated_at);
            ticket.clone()
        }))
    }
}
