use actix_web::{web, HttpResponse};
use validator::Validate;

use gt_core::errors::DomainError;
use gt_core::repositories::{TicketRepository, UserRepository};

use crate::app::AppState;
use crate::dto::{first_validation_message, RegisterRequest, RegisterResponse};
use crate::handlers::ApiError;

/// Handler for POST /auth/register
///
/// Creates a citizen account.
///
/// # Request Body
///
/// ```json
/// { "name": "Maria Silva", "email": "maria@example.com", "password": "segredo123" }
/// ```
///
/// # Response
///
/// ```json
/// { "success": true, "message": "Usuário cadastrado com sucesso", "userId": "..." }
/// ```
///
/// ## Errors
/// - 400 on invalid fields or an already registered email
pub async fn register<U, T>(
    state: web::Data<AppState<U, T>>,
    body: web::Json<RegisterRequest>,
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

    let user = state
        .auth_service
        .register(&request.name, &request.email, &request.password)
        .await
        .map_err(|e| state.api_error(e))?;

    Ok(HttpResponse::Ok().json(RegisterResponse {
        success: true,
        message: "Usuário cadastrado com sucesso".to_string(),
        user_id: user.id,
    }))
}
