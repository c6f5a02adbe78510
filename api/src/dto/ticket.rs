use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use gt_core::domain::entities::ticket::{NewTicket, TicketStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[validate(length(min = 3, message = "Categoria deve ter pelo menos 3 caracteres"))]
    pub category: String,

    #[validate(length(min = 10, message = "Descrição deve ter pelo menos 10 caracteres"))]
    pub description: String,

    #[validate(length(min = 5, message = "Endereço deve ter pelo menos 5 caracteres"))]
    pub address: String,

    /// Image URL or base64 data
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl From<CreateTicketRequest> for NewTicket {
    fn from(request: CreateTicketRequest) -> Self {
        NewTicket::new(
            request.category,
            request.description,
            request.address,
            request.photo_url,
        )
    }
}

/// Body of the status update; unknown values fail JSON deserialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTicketResponse {
    pub success: bool,
    /// Ticket id, handed to the citizen for tracking
    pub protocol: Uuid,
    pub message: String,
}
