use actix_web::{web, HttpResponse};

use gt_core::repositories::{TicketRepository, UserRepository};
use gt_shared::ApiResponse;

use crate::app::AppState;
use crate::dto::UpdateStatusRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for PATCH /admin/tickets/{id}/status
///
/// # Request Body
///
/// ```json
/// { "status": "EM_ANALISE" }
/// ```
///
/// An unknown status is rejected while decoding the body (400).
pub async fn update_ticket_status<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthContext,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let ticket = state
        .ticket_service
        .set_status(&auth.identity, &path.into_inner(), body.status)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(
        ApiResponse::success(ticket).with_message("Status atualizado com sucesso"),
    ))
}
