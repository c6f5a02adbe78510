use actix_web::{web, HttpResponse};
use validator::Validate;

use gt_core::errors::DomainError;
use gt_core::repositories::{TicketRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{first_validation_message, LoginRequest, LoginResponse};
use crate::handlers::ApiError;

/// Handler for POST /auth/login
///
/// Exchanges email and password for a bearer token. An unknown email and a
/// wrong password produce the same 401 body.
pub async fn login<U, T>(
    state: web::Data<AppState<U, T>>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let mut request = body.into_inner();
    request.email = request.email.trim().to_string();

    request
        .validate()
        .map_err(|e| state.api_error(DomainError::validation(first_validation_message(&e))))?;

    let result = state
        .auth_service
        .login(&request.email, &request.password)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(LoginResponse {
        success: true,
        token: result.token,
        user: result.user,
    }))
}
