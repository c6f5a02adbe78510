//! MySQL implementation of the TicketRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use gt_core::domain::entities::ticket::{Ticket, TicketOwner, TicketStatus, TicketWithOwner};
use gt_core::errors::DomainError;
use gt_core::repositories::TicketRepository;

use super::{column_error, query_failed};

const TICKET_COLUMNS: &str = "t.id, t.category, t.description, t.address, t.photo_url, \
     t.status, t.user_id, t.created_at, t.updated_at";

/// MySQL implementation of TicketRepository
pub struct MySqlTicketRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlTicketRepository {
    /// Create a new MySQL ticket repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_uuid(raw: &str) -> Result<Uuid, DomainError> {
        Uuid::parse_str(raw).map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))
    }

    /// Convert database row to Ticket entity
    fn row_to_ticket(row: &sqlx::mysql::MySqlRow) -> Result<Ticket, DomainError> {
        let id: String = row.try_get("id").map_err(|e| column_error("id", e))?;
        let user_id: String = row.try_get("user_id").map_err(|e| column_error("user_id", e))?;
        let status: String = row.try_get("status").map_err(|e| column_error("status", e))?;

        Ok(Ticket {
            id: Self::parse_uuid(&id)?,
            category: row.try_get("category").map_err(|e| column_error("category", e))?,
            description: row
                .try_get("description")
                .map_err(|e| column_error("description", e))?,
            address: row.try_get("address").map_err(|e| column_error("address", e))?,
            photo_url: row
                .try_get("photo_url")
                .map_err(|e| column_error("photo_url", e))?,
            status: status
                .parse::<TicketStatus>()
                .map_err(|_| DomainError::internal(format!("Unknown stored status: {}", status)))?,
            user_id: Self::parse_uuid(&user_id)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column_error("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column_error("updated_at", e))?,
        })
    }

    fn row_to_ticket_with_owner(row: &sqlx::mysql::MySqlRow) -> Result<TicketWithOwner, DomainError> {
        Ok(TicketWithOwner {
            ticket: Self::row_to_ticket(row)?,
            user: TicketOwner {
                name: row
                    .try_get("owner_name")
                    .map_err(|e| column_error("owner_name", e))?,
                email: row
                    .try_get("owner_email")
                    .map_err(|e| column_error("owner_email", e))?,
            },
        })
    }
}

#[async_trait]
impl TicketRepository for MySqlTicketRepository {
    async fn create(&self, ticket: Ticket) -> Result<Ticket, DomainError> {
        let query = r#"
            INSERT INTO tickets
                (id, category, description, address, photo_url, status, user_id, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(ticket.id.to_string())
            .bind(&ticket.category)
            .bind(&ticket.description)
            .bind(&ticket.address)
            .bind(&ticket.photo_url)
            .bind(ticket.status.as_str())
            .bind(ticket.user_id.to_string())
            .bind(ticket.created_at)
            .bind(ticket.updated_at)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(ticket)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Ticket>, DomainError> {
        let query = format!("SELECT {} FROM tickets t WHERE t.id = ? LIMIT 1", TICKET_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed)?;

        result.as_ref().map(Self::row_to_ticket).transpose()
    }

    async fn list_by_owner(&self, user_id: Uuid) -> Result<Vec<Ticket>, DomainError> {
        let query = format!(
            "SELECT {} FROM tickets t WHERE t.user_id = ? ORDER BY t.created_at DESC",
            TICKET_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_ticket).collect()
    }

    async fn list_all_with_owner(&self) -> Result<Vec<TicketWithOwner>, DomainError> {
        let query = format!(
            "SELECT {}, u.name AS owner_name, u.email AS owner_email \
             FROM tickets t INNER JOIN users u ON u.id = t.user_id \
             ORDER BY t.created_at DESC",
            TICKET_COLUMNS
        );

        let rows = sqlx::query(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed)?;

        rows.iter().map(Self::row_to_ticket_with_owner).collect()
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: TicketStatus,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Ticket>, DomainError> {
        let result = sqlx::query("UPDATE tickets SET status = ?, updated_at = ? WHERE id = ?")
            .bind(status.as_str())
            .bind(updated_at)
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        // MySQL reports matched-but-unchanged rows as 0 affected, so a
        // same-status update is confirmed by reading the row back.
        if result.rows_affected() == 0 {
            tracing::debug!(ticket_id = %id, "status update touched no rows");
        }

        self.find_by_id(id).await
    }
}
