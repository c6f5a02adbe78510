//! Unit tests for user entity

use crate::domain::entities::user::{Role, User};

#[test]
fn test_new_citizen_creation() {
    let user = User::new_citizen(
        "Maria Silva".to_string(),
        "maria@example.com".to_string(),
        "$2b$04$hash".to_string(),
    );

    assert_eq!(user.role, Role::Citizen);
    assert_eq!(user.created_at, user.updated_at);
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = User::new(
        "Admin".to_string(),
        "admin@example.com".to_string(),
        "$2b$04$secret".to_string(),
        Role::Admin,
    );

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "ADMIN");
}

#[test]
fn test_summary_hides_credentials() {
    let user = User::new_citizen(
        "João".to_string(),
        "joao@example.com".to_string(),
        "$2b$04$hash".to_string(),
    );

    let summary = user.summary();
    assert_eq!(summary.id, user.id);
    assert_eq!(summary.email, "joao@example.com");
    assert_eq!(summary.role, Role::Citizen);
}

#[test]
fn test_role_parsing() {
    assert_eq!("CITIZEN".parse::<Role>().unwrap(), Role::Citizen);
    assert_eq!("ADMIN".parse::<Role>().unwrap(), Role::Admin);
    assert!("admin".parse::<Role>().is_err());
    assert_eq!(Role::Admin.to_string(), "ADMIN");
}
