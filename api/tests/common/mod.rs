//! Shared fixtures for the HTTP integration tests
//!
//! Builds the real application over the in-memory repositories, a manual
//! clock and cheap bcrypt hashing.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use chrono::Utc;

use gt_api::{create_app, handlers::ErrorDetail, AppState, RateLimiters};
use gt_core::domain::value_objects::Identity;
use gt_core::repositories::{MockStoreHealth, MockTicketRepository, MockUserRepository};
use gt_core::services::{
    AuthService, AuthServiceConfig, Clock, ManualClock, TicketService, TokenService,
    TokenServiceConfig,
};
use gt_infra::InMemoryRateLimiter;
use gt_shared::WindowLimit;

pub const CORS_ORIGIN: &str = "http://localhost:5173";
pub const ADMIN_EMAIL: &str = "admin@govtech.com";
pub const ADMIN_PASSWORD: &str = "admin123";

pub type TestState = AppState<MockUserRepository, MockTicketRepository>;

pub struct TestContext {
    pub users: MockUserRepository,
    pub tickets: MockTicketRepository,
    pub health: MockStoreHealth,
    pub clock: Arc<ManualClock>,
    pub state: web::Data<TestState>,
    pub limiters: RateLimiters,
}

impl TestContext {
    /// Limits high enough to stay out of the way
    pub fn new() -> Self {
        Self::with_limits(WindowLimit::new(1000, 60), WindowLimit::new(1000, 60))
    }

    pub fn with_limits(general: WindowLimit, auth: WindowLimit) -> Self {
        let users = MockUserRepository::new();
        let tickets = MockTicketRepository::new(users.clone());
        let health = MockStoreHealth::up();
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let dyn_clock: Arc<dyn Clock> = clock.clone();

        let token_service = Arc::new(TokenService::with_clock(
            TokenServiceConfig {
                jwt_secret: "integration-test-secret".to_string(),
                token_expiry_seconds: 7200,
                issuer: "gt-api".to_string(),
                audience: "gt-web".to_string(),
            },
            dyn_clock.clone(),
        ));
        let auth_service = Arc::new(AuthService::new(
            Arc::new(users.clone()),
            token_service.clone(),
            dyn_clock.clone(),
            AuthServiceConfig { bcrypt_cost: 4 },
        ));
        let ticket_service = Arc::new(TicketService::new(Arc::new(tickets.clone()), dyn_clock.clone()));

        let state = web::Data::new(AppState {
            auth_service,
            ticket_service,
            token_service,
            store_health: Arc::new(health.clone()),
            error_detail: ErrorDetail::redacted(),
        });

        let limiters = RateLimiters {
            enabled: true,
            general: Arc::new(InMemoryRateLimiter::with_clock("general", general, dyn_clock.clone())),
            auth: Arc::new(InMemoryRateLimiter::with_clock("auth", auth, dyn_clock)),
        };

        Self {
            users,
            tickets,
            health,
            clock,
            state,
            limiters,
        }
    }

    pub fn without_rate_limits(mut self) -> Self {
        self.limiters.enabled = false;
        self
    }

    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody>,
            Error = Error,
            InitError = (),
        >,
    > {
        create_app(self.state.clone(), self.limiters.clone(), CORS_ORIGIN)
    }

    /// Registers a citizen through the service and returns a bearer token
    pub async fn citizen_token(&self, name: &str, email: &str) -> (Identity, String) {
        self.state
            .auth_service
            .register(name, email, "senha123")
            .await
            .expect("register citizen");
        self.login(email, "senha123").await
    }

    /// Seeds the administrator and returns a bearer token
    pub async fn admin_token(&self) -> (Identity, String) {
        self.state
            .auth_service
            .ensure_admin("Admin User", ADMIN_EMAIL, ADMIN_PASSWORD)
            .await
            .expect("seed admin");
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    async fn login(&self, email: &str, password: &str) -> (Identity, String) {
        let result = self
            .state
            .auth_service
            .login(email, password)
            .await
            .expect("login");
        (Identity::new(result.user.id, result.user.role), result.token)
    }
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}

pub fn ticket_body(description: &str) -> serde_json::Value {
    serde_json::json!({
        "category": "Buraco",
        "description": description,
        "address": "Rua das Flores, 123",
    })
}
