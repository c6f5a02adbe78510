//! Seeds the administrator account.
//!
//! Reads `ADMIN_EMAIL`, `ADMIN_PASSWORD` (required) and `ADMIN_NAME` from
//! the environment. Running it again with an email that is already
//! registered leaves that account untouched.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use gt_core::services::{
    AuthService, AuthServiceConfig, EnsureAdminOutcome, SystemClock, TokenService,
    TokenServiceConfig,
};
use gt_infra::{DatabasePool, MySqlUserRepository};
use gt_shared::AppConfig;

const DEFAULT_ADMIN_EMAIL: &str = "admin@govtech.com";
const DEFAULT_ADMIN_NAME: &str = "Admin User";

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let email = std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
    let name = std::env::var("ADMIN_NAME").unwrap_or_else(|_| DEFAULT_ADMIN_NAME.to_string());
    let password = std::env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

    let database = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;

    let auth_service = AuthService::new(
        Arc::new(MySqlUserRepository::new(database.get_pool().clone())),
        Arc::new(TokenService::new(TokenServiceConfig::from(&config.auth))),
        Arc::new(SystemClock),
        AuthServiceConfig::from(&config.auth),
    );

    let outcome = auth_service
        .ensure_admin(&name, &email, &password)
        .await
        .context("failed to create the administrator")?;

    match outcome {
        EnsureAdminOutcome::Created(id) => info!("Administrator {} created ({})", email, id),
        EnsureAdminOutcome::AlreadyExists(id) => {
            info!("Email {} already registered ({}); nothing changed", email, id)
        }
    }

    database.close().await;
    Ok(())
}
