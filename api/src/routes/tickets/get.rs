use actix_web::{web, HttpResponse};

use gt_core::repositories::{TicketRepository, UserRepository};
use gt_shared::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;

/// Handler for GET /tickets/{id}
///
/// Public: the protocol number is enough to follow a ticket.
pub async fn get_ticket<U, T>(
    state: web::Data<AppState<U, T>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let ticket = state
        .ticket_service
        .get_ticket(&path.into_inner())
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(ticket)))
}
