//! Application state and factory
//!
//! This module holds the shared state handed to every handler and builds
//! the Actix-web application with its middleware stack and routes.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::Logger,
    web, App, Error,
};

use gt_core::errors::DomainError;
use gt_core::repositories::{StoreHealth, TicketRepository, UserRepository};
use gt_core::services::{AuthService, RateLimiterTrait, TicketService, TokenService};

use crate::handlers::error::{json_error_handler, not_found, ApiError, ErrorDetail};
use crate::middleware::{create_cors, JwtAuth, RateLimit, RequireRole};
use crate::routes::{admin, auth, health, index, tickets};

/// 429 message for the `/auth` limiter
pub const AUTH_RATE_LIMIT_MESSAGE: &str = "Muitas tentativas de login. Aguarde alguns minutos.";

/// Application state that holds shared services
pub struct AppState<U, T>
where
    U: UserRepository,
    T: TicketRepository,
{
    pub auth_service: Arc<AuthService<U>>,
    pub ticket_service: Arc<TicketService<T>>,
    pub token_service: Arc<TokenService>,
    pub store_health: Arc<dyn StoreHealth>,
    pub error_detail: ErrorDetail,
}

impl<U, T> AppState<U, T>
where
    U: UserRepository,
    T: TicketRepository,
{
    /// Wraps a domain error with this deployment's error detail level
    pub fn api_error(&self, error: DomainError) -> ApiError {
        ApiError::new(error, self.error_detail)
    }
}

/// The two request limiters and whether they are enforced
#[derive(Clone)]
pub struct RateLimiters {
    pub enabled: bool,
    /// Applies to every route
    pub general: Arc<dyn RateLimiterTrait>,
    /// Applies to `/auth/*` on top of the general limit
    pub auth: Arc<dyn RateLimiterTrait>,
}

/// Create and configure the application with all dependencies
pub fn create_app<U, T>(
    app_state: web::Data<AppState<U, T>>,
    limiters: RateLimiters,
    cors_origin: &str,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    T: TicketRepository + 'static,
{
    let token_service = app_state.token_service.clone();

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        // Last wrap runs first: logging, then CORS, then the general limit
        .wrap(RateLimit::when(limiters.enabled, limiters.general))
        .wrap(create_cors(cors_origin))
        .wrap(Logger::default())
        .route("/", web::get().to(index::api_index))
        .route("/health", web::get().to(health::health_check::<U, T>))
        .service(
            web::scope("/auth")
                .wrap(
                    RateLimit::when(limiters.enabled, limiters.auth)
                        .with_message(AUTH_RATE_LIMIT_MESSAGE),
                )
                .route("/register", web::post().to(auth::register::<U, T>))
                .route("/login", web::post().to(auth::login::<U, T>)),
        )
        .service(
            web::resource("/tickets")
                .wrap(JwtAuth::new(token_service.clone()))
                .route(web::post().to(tickets::create_ticket::<U, T>))
                .route(web::get().to(tickets::list_own_tickets::<U, T>)),
        )
        .service(web::resource("/tickets/{id}").route(web::get().to(tickets::get_ticket::<U, T>)))
        .service(
            web::scope("/admin")
                .wrap(RequireRole::admin())
                .wrap(JwtAuth::new(token_service))
                .route("/tickets", web::get().to(admin::list_all_tickets::<U, T>))
                .route(
                    "/tickets/{id}/status",
                    web::patch().to(admin::update_ticket_status::<U, T>),
                ),
        )
        .default_service(web::route().to(not_found))
}
