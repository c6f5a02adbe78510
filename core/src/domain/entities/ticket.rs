//! Ticket entity: a citizen's infrastructure complaint.
//!
//! The ticket id doubles as the public protocol number handed to the
//! citizen for tracking.

use chrono::{DateTime, Utc};
use gt_shared::validation::has_min_chars;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::{DomainError, DomainResult};

pub const MIN_CATEGORY_CHARS: usize = 3;
pub const MIN_DESCRIPTION_CHARS: usize = 10;
pub const MIN_ADDRESS_CHARS: usize = 5;

/// Ticket workflow status
///
/// The workflow is flat: any status may be set from any other, including
/// itself, and `Resolvido` can be reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    /// Submitted, not yet reviewed
    Pendente,
    /// Under review by staff
    EmAnalise,
    /// Resolved
    Resolvido,
}

impl TicketStatus {
    pub const ALL: [TicketStatus; 3] = [
        TicketStatus::Pendente,
        TicketStatus::EmAnalise,
        TicketStatus::Resolvido,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pendente => "PENDENTE",
            TicketStatus::EmAnalise => "EM_ANALISE",
            TicketStatus::Resolvido => "RESOLVIDO",
        }
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        TicketStatus::Pendente
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDENTE" => Ok(TicketStatus::Pendente),
            "EM_ANALISE" => Ok(TicketStatus::EmAnalise),
            "RESOLVIDO" => Ok(TicketStatus::Resolvido),
            other => Err(DomainError::validation(format!(
                "Status inválido: {}. Use PENDENTE, EM_ANALISE ou RESOLVIDO",
                other
            ))),
        }
    }
}

/// Persisted ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Protocol number
    pub id: Uuid,
    pub category: String,
    pub description: String,
    pub address: String,
    /// URL or inline base64 image
    pub photo_url: Option<String>,
    pub status: TicketStatus,
    /// Owner; set once at creation
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Builds a fresh `Pendente` ticket owned by `user_id`
    pub fn new(user_id: Uuid, input: NewTicket, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            category: input.category,
            description: input.description,
            address: input.address,
            photo_url: input.photo_url,
            status: TicketStatus::Pendente,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.user_id == user_id
    }

    /// Unconditionally moves the ticket to `status`
    pub fn set_status(&mut self, status: TicketStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

/// Citizen-supplied fields of a new ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTicket {
    pub category: String,
    pub description: String,
    pub address: String,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl NewTicket {
    pub fn new(
        category: impl Into<String>,
        description: impl Into<String>,
        address: impl Into<String>,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            category: category.into(),
            description: description.into(),
            address: address.into(),
            photo_url,
        }
    }

    /// Checks the minimum lengths and drops a blank photo reference
    pub fn validated(mut self) -> DomainResult<Self> {
        if !has_min_chars(&self.category, MIN_CATEGORY_CHARS) {
            return Err(DomainError::validation(format!(
                "Categoria deve ter pelo menos {} caracteres",
                MIN_CATEGORY_CHARS
            )));
        }
        if !has_min_chars(&self.description, MIN_DESCRIPTION_CHARS) {
            return Err(DomainError::validation(format!(
                "Descrição deve ter pelo menos {} caracteres",
                MIN_DESCRIPTION_CHARS
            )));
        }
        if !has_min_chars(&self.address, MIN_ADDRESS_CHARS) {
            return Err(DomainError::validation(format!(
                "Endereço deve ter pelo menos {} caracteres",
                MIN_ADDRESS_CHARS
            )));
        }
        self.photo_url = self.photo_url.filter(|photo| !photo.trim().is_empty());
        Ok(self)
    }
}

/// Owner contact shown to administrators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketOwner {
    pub name: String,
    pub email: String,
}

/// Ticket joined with its owner, for the admin listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketWithOwner {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub user: TicketOwner,
}
