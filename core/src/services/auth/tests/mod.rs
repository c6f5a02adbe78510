
use std::sync::Arc;

use crate::repositories::MockUserRepository;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::clock::{Clock, ManualClock};
use crate::services::token::{TokenService, TokenServiceConfig};

pub(super) fn token_service(clock: Arc<dyn Clock>) -> Arc<TokenService> {
    Arc::new(TokenService::with_clock(
        TokenServiceConfig {
            jwt_secret: "auth-test-secret".to_string(),
            token_expiry_seconds: 7200,
            issuer: "govtech".to_string(),
            audience: "govtech-api".to_string(),
        },
        clock,
    ))
}

/// Auth service over an empty in-memory store, with the cheapest bcrypt cost
pub(super) fn auth_service() -> (AuthService<MockUserRepository>, Arc<MockUserRepository>) {
    let (service, users, _) = auth_service_with_clock();
    (service, users)
}

/// Same as [`auth_service`], also returning the clock shared by both services
pub(super) fn auth_service_with_clock() -> (
    AuthService<MockUserRepository>,
    Arc<MockUserRepository>,
    Arc<ManualClock>,
) {
    let users = Arc::new(MockUserRepository::new());
    let clock = Arc::new(ManualClock::default());
    let service = AuthService::new(
        users.clone(),
        token_service(clock.clone()),
        clock.clone(),
        AuthServiceConfig { bcrypt_cost: 4 },
    );
    (service, users, clock)
}
