//! CORS middleware configuration for the web client.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use super::rate_limit::{X_RATELIMIT_LIMIT, X_RATELIMIT_REMAINING, X_RATELIMIT_RESET};

/// Max age for preflight cache in seconds
const PREFLIGHT_MAX_AGE: usize = 3600;

/// Creates a CORS middleware admitting `origin` with credentials
///
/// `*` admits any origin; useful in development only.
pub fn create_cors(origin: &str) -> Cors {
    let cors = if origin.trim() == "*" {
        log::warn!("CORS configured to allow any origin");
        Cors::default().allow_any_origin()
    } else {
        log::info!("CORS configured for origin {}", origin);
        Cors::default().allowed_origin(origin.trim())
    };

    cors.allowed_methods(vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ])
    .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
    .expose_headers(vec![
        X_RATELIMIT_LIMIT,
        X_RATELIMIT_REMAINING,
        X_RATELIMIT_RESET,
        header::RETRY_AFTER,
    ])
    .supports_credentials()
    .max_age(PREFLIGHT_MAX_AGE)
}
