use actix_web::{web, HttpResponse};
use chrono::Utc;
use serde_json::json;

use gt_core::repositories::{TicketRepository, UserRepository};

use crate::app::AppState;

/// Handler for GET /health
///
/// 200 while the database answers, 503 otherwise.
pub async fn health_check<U, T>(state: web::Data<AppState<U, T>>) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    match state.store_health.ping().await {
        Ok(()) => HttpResponse::Ok().json(json!({
            "status": "ok",
            "database": "up",
            "timestamp": Utc::now().to_rfc3339(),
        })),
        Err(e) => {
            log::error!("Health check failed: {}", e);
            let error = if state.error_detail.exposes_internal() {
                e.to_string()
            } else {
                "Banco de dados indisponível".to_string()
            };
            HttpResponse::ServiceUnavailable().json(json!({
                "status": "error",
                "database": "down",
                "error": error,
            }))
        }
    }
}
