use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use log::{error, info};

use gt_api::{create_app, handlers::ErrorDetail, AppState, RateLimiters};
use gt_core::services::{
    AuthService, AuthServiceConfig, Clock, SystemClock, TicketService, TokenService,
    TokenServiceConfig,
};
use gt_infra::{DatabasePool, InMemoryRateLimiter, MySqlTicketRepository, MySqlUserRepository};
use gt_shared::AppConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = AppConfig::from_env();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting GovTech API Server ({})", config.environment);

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, e.to_string()));
    }

    let database = match DatabasePool::new(config.database.clone()).await {
        Ok(pool) => Arc::new(pool),
        Err(e) => {
            error!("Failed to connect to the database: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, e.to_string()));
        }
    };
    info!("Database connected: {}", database.get_statistics());

    let user_repository = Arc::new(MySqlUserRepository::new(database.get_pool().clone()));
    let ticket_repository = Arc::new(MySqlTicketRepository::new(database.get_pool().clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let token_service = Arc::new(TokenService::with_clock(
        TokenServiceConfig::from(&config.auth),
        clock.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service.clone(),
        clock.clone(),
        AuthServiceConfig::from(&config.auth),
    ));
    let ticket_service = Arc::new(TicketService::new(ticket_repository, clock.clone()));

    let general_limiter = Arc::new(InMemoryRateLimiter::with_clock(
        "general",
        config.rate_limit.general,
        clock.clone(),
    ));
    let auth_limiter = Arc::new(InMemoryRateLimiter::with_clock(
        "auth",
        config.rate_limit.auth,
        clock,
    ));
    if config.rate_limit.enabled {
        general_limiter.clone().spawn_sweeper(None);
        auth_limiter.clone().spawn_sweeper(None);
    } else {
        info!("Rate limiting disabled");
    }
    let limiters = RateLimiters {
        enabled: config.rate_limit.enabled,
        general: general_limiter,
        auth: auth_limiter,
    };

    let app_state = web::Data::new(AppState {
        auth_service,
        ticket_service,
        token_service,
        store_health: database.clone(),
        error_detail: ErrorDetail::for_environment(config.environment),
    });

    let bind_address = config.server.bind_address();
    let cors_origin = config.server.cors_origin.clone();
    info!("Server will bind to: {}", bind_address);

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), limiters.clone(), &cors_origin)
    })
    .client_request_timeout(std::time::Duration::from_secs(config.server.request_timeout));

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    let result = server.bind(&bind_address)?.run().await;

    database.close().await;
    info!("Server stopped");
    result
}
