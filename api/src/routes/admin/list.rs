use actix_web::{web, HttpResponse};

use gt_core::repositories::{TicketRepository, UserRepository};
use gt_shared::ApiResponse;

use crate::app::AppState;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;

/// Handler for GET /admin/tickets: every ticket with its owner's name and email
pub async fn list_all_tickets<U, T>(
    state: web::Data<AppState<U, T>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let tickets = state
        .ticket_service
        .list_all_tickets(&auth.identity)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(tickets)))
}
