//! Mapping from domain errors to HTTP responses.
//!
//! Every status code decision lives here; services and routes only ever
//! produce [`DomainError`].

use actix_web::{
    error::JsonPayloadError,
    http::{header, StatusCode},
    HttpRequest, HttpResponse, ResponseError,
};
use gt_core::errors::DomainError;
use gt_shared::{error_codes, Environment, ErrorResponse};
use std::fmt;

const GENERIC_INTERNAL_MESSAGE: &str = "Erro interno do servidor";

/// How much of an internal failure is revealed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorDetail {
    expose_internal: bool,
}

impl ErrorDetail {
    /// Internal messages replaced by a generic string
    pub fn redacted() -> Self {
        Self {
            expose_internal: false,
        }
    }

    /// Internal messages passed through (development only)
    pub fn verbose() -> Self {
        Self {
            expose_internal: true,
        }
    }

    pub fn for_environment(environment: Environment) -> Self {
        Self {
            expose_internal: environment.exposes_error_details(),
        }
    }

    pub fn exposes_internal(&self) -> bool {
        self.expose_internal
    }

    fn message_for(&self, error: &DomainError) -> String {
        match error {
            DomainError::Internal { .. } if !self.expose_internal => {
                GENERIC_INTERNAL_MESSAGE.to_string()
            }
            other => other.to_string(),
        }
    }
}

impl Default for ErrorDetail {
    fn default() -> Self {
        Self::redacted()
    }
}

/// HTTP status for each domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } | DomainError::DuplicateEmail => StatusCode::BAD_REQUEST,
        DomainError::InvalidCredentials | DomainError::Unauthorized { .. } => {
            StatusCode::UNAUTHORIZED
        }
        DomainError::Forbidden => StatusCode::FORBIDDEN,
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        DomainError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Machine-readable code for each domain error
pub fn error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::Validation { .. } => error_codes::VALIDATION_ERROR,
        DomainError::DuplicateEmail => error_codes::DUPLICATE_EMAIL,
        DomainError::InvalidCredentials => error_codes::INVALID_CREDENTIALS,
        DomainError::Unauthorized { .. } => error_codes::UNAUTHORIZED,
        DomainError::Forbidden => error_codes::FORBIDDEN,
        DomainError::NotFound { .. } => error_codes::NOT_FOUND,
        DomainError::RateLimited { .. } => error_codes::RATE_LIMIT_EXCEEDED,
        DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
    }
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError, detail: ErrorDetail) -> HttpResponse {
    if error.is_client_error() {
        log::debug!("Request rejected: {}", error);
    } else {
        log::error!("Domain Error: {:?}", error);
    }

    let body = ErrorResponse::new(error_code(error), detail.message_for(error));
    let mut response = HttpResponse::build(status_for(error));
    if let DomainError::RateLimited { retry_after_secs } = error {
        response.insert_header((header::RETRY_AFTER, retry_after_secs.to_string()));
    }
    response.json(body)
}

/// Domain error carried through actix's error channel
///
/// Used by extractors and middleware, which must return `actix_web::Error`.
#[derive(Debug)]
pub struct ApiError {
    error: DomainError,
    detail: ErrorDetail,
}

impl ApiError {
    pub fn new(error: DomainError, detail: ErrorDetail) -> Self {
        Self { error, detail }
    }

    pub fn domain_error(&self) -> &DomainError {
        &self.error
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::new(error, ErrorDetail::default())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(&self.error)
    }

    fn error_response(&self) -> HttpResponse {
        handle_domain_error(&self.error, self.detail)
    }
}

/// Turns JSON body rejections into the uniform 400 envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type deve ser application/json".to_string(),
        JsonPayloadError::Deserialize(e) => format!("JSON inválido: {}", e),
        other => format!("Corpo da requisição inválido: {}", other),
    };
    ApiError::from(DomainError::validation(message)).into()
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "Recurso não encontrado",
    ))
}
