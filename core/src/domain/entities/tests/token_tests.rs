//! Unit tests for token claims

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::token::Claims;
use crate::domain::entities::user::Role;

#[test]
fn test_claims_creation() {
    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let claims = Claims::new(user_id, Role::Citizen, "govtech", "govtech-api", now, Duration::hours(2));

    assert_eq!(claims.user_id().unwrap(), user_id);
    assert_eq!(claims.role, Role::Citizen);
    assert_eq!(claims.exp - claims.iat, 7200);
    assert_eq!(claims.nbf, claims.iat);
    assert_eq!(claims.iss, "govtech");
    assert_eq!(claims.aud, "govtech-api");
}

#[test]
fn test_claims_have_unique_jti() {
    let user_id = Uuid::new_v4();
    let now = Utc::now();
    let a = Claims::new(user_id, Role::Admin, "govtech", "govtech-api", now, Duration::hours(2));
    let b = Claims::new(user_id, Role::Admin, "govtech", "govtech-api", now, Duration::hours(2));

    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_malformed_subject() {
    let mut claims = Claims::new(
        Uuid::new_v4(),
        Role::Citizen,
        "govtech",
        "govtech-api",
        Utc::now(),
        Duration::hours(2),
    );
    claims.sub = "not-a-uuid".to_string();

    assert!(claims.user_id().is_err());
}

#[test]
fn test_role_round_trips_through_json() {
    let claims = Claims::new(
        Uuid::new_v4(),
        Role::Admin,
        "govtech",
        "govtech-api",
        Utc::now(),
        Duration::hours(2),
    );
    let json = serde_json::to_value(&claims).unwrap();
    assert_eq!(json["role"], "ADMIN");
}
