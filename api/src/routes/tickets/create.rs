use actix_web::{web, HttpResponse};
use validator::Validate;

use gt_core::errors::DomainError;
use gt_core::repositories::{TicketRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{first_validation_message, CreateTicketRequest, CreateTicketResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for POST /tickets
///
/// Registers a ticket owned by the caller and answers 201 with its
/// protocol number.
pub async fn create_ticket<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthContext,
    body: web::Json<CreateTicketRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let request = body.into_inner();
    request
        .validate()
        .map_err(|e| state.api_error(DomainError::validation(first_validation_message(&e))))?;

    let ticket = state
        .ticket_service
        .create_ticket(&auth.identity, request.into())
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Created().json(CreateTicketResponse {
        success: true,
        protocol: ticket.id,
        message: "Chamado registrado com sucesso".to_string(),
    }))
}
