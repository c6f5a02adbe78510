//! Main authentication service implementation

use std::sync::Arc;

use gt_shared::validation::{has_min_chars, is_valid_email, normalize_email};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::user::{Role, User};
use crate::domain::value_objects::{Identity, LoginResult};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::clock::Clock;
use crate::services::token::TokenService;

use super::config::{AuthServiceConfig, MIN_NAME_CHARS, MIN_PASSWORD_CHARS};
use super::password::{hash_password, verify_password};

/// Outcome of seeding the administrator account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureAdminOutcome {
    /// A new administrator was stored
    Created(Uuid),
    /// The email was already registered; nothing changed
    AlreadyExists(Uuid),
}

/// Fails with `Forbidden` unless `identity` holds `role`
pub fn require_role(identity: &Identity, role: Role) -> DomainResult<()> {
    if identity.role == role {
        Ok(())
    } else {
        Err(DomainError::Forbidden)
    }
}

/// Authentication service for registration, login and token checks
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Token service for JWT management
    token_service: Arc<TokenService>,
    /// Time source for token issuance
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: AuthServiceConfig,
    /// Hash verified against when the email is unknown, so both login
    /// failures cost one bcrypt verification
    dummy_hash: OnceCell<String>,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        clock: Arc<dyn Clock>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            clock,
            config,
            dummy_hash: OnceCell::new(),
        }
    }

    /// Register a new citizen account
    ///
    /// The email is trimmed and lower-cased before the uniqueness check and
    /// storage. The repository's unique constraint is authoritative, so a
    /// registration that loses a race still yields `DuplicateEmail`.
    ///
    /// # Errors
    ///
    /// * `Validation` - name shorter than 3, malformed email, password shorter than 6
    /// * `DuplicateEmail` - email already registered
    pub async fn register(&self, name: &str, email: &str, password: &str) -> DomainResult<User> {
        let (name, email) = validate_account_fields(name, email, password)?;

        if self.user_repository.exists_by_email(&email).await? {
            debug!("registration rejected: email already registered");
            return Err(DomainError::DuplicateEmail);
        }

        let hash = hash_password(password.to_string(), self.config.bcrypt_cost).await?;
        let user = self
            .user_repository
            .create(User::new_citizen(name, email, hash))
            .await?;

        info!(user_id = %user.id, "citizen registered");
        Ok(user)
    }

    /// Exchange email and password for a session token
    ///
    /// Unknown email and wrong password both yield `InvalidCredentials`.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<LoginResult> {
        let email = normalize_email(email);

        let user = match self.user_repository.find_by_email(&email).await? {
            Some(user) => user,
            None => {
                // Burn one verification so timing matches the known-email path
                let dummy = self.dummy_hash().await?;
                let _ = verify_password(password.to_string(), dummy).await?;
                debug!("login failed: unknown email");
                return Err(DomainError::InvalidCredentials);
            }
        };

        if !verify_password(password.to_string(), user.password_hash.clone()).await? {
            warn!(user_id = %user.id, "login failed: wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let identity = Identity::new(user.id, user.role);
        let (token, expires_at) = self.token_service.issue(identity, self.clock.now())?;

        info!(user_id = %user.id, role = %user.role, "login succeeded");
        Ok(LoginResult::new(
            token,
            expires_at,
            self.token_service.expiry_seconds(),
            user.summary(),
        ))
    }

    /// Verify a bearer token and return the caller's identity
    ///
    /// Claims are trusted as issued; the user record is not re-read.
    pub fn authenticate(&self, token: &str) -> DomainResult<Identity> {
        self.token_service.verify(token)
    }

    /// Fails with `Forbidden` unless `identity` holds `role`
    pub fn require_role(&self, identity: &Identity, role: Role) -> DomainResult<()> {
        require_role(identity, role)
    }

    /// Create the administrator account unless the email is already taken
    ///
    /// An existing account is left untouched, whatever its role.
    pub async fn ensure_admin(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> DomainResult<EnsureAdminOutcome> {
        let (name, email) = validate_account_fields(name, email, password)?;

        if let Some(existing) = self.user_repository.find_by_email(&email).await? {
            if existing.role != Role::Admin {
                warn!(user_id = %existing.id, "seed email belongs to a non-admin account");
            }
            return Ok(EnsureAdminOutcome::AlreadyExists(existing.id));
        }

        let hash = hash_password(password.to_string(), self.config.bcrypt_cost).await?;
        match self
            .user_repository
            .create(User::new(name, email.clone(), hash, Role::Admin))
            .await
        {
            Ok(user) => {
                info!(user_id = %user.id, "administrator created");
                Ok(EnsureAdminOutcome::Created(user.id))
            }
            Err(DomainError::DuplicateEmail) => {
                // Lost a race with a concurrent seed
                let existing = self
                    .user_repository
                    .find_by_email(&email)
                    .await?
                    .ok_or_else(|| DomainError::internal("admin vanished after duplicate insert"))?;
                Ok(EnsureAdminOutcome::AlreadyExists(existing.id))
            }
            Err(e) => Err(e),
        }
    }

    async fn dummy_hash(&self) -> DomainResult<String> {
        let cost = self.config.bcrypt_cost;
        self.dummy_hash
            .get_or_try_init(|| hash_password("dummy-password".to_string(), cost))
            .await
            .cloned()
    }
}

/// Checks registration rules; returns the trimmed name and normalized email
fn validate_account_fields(
    name: &str,
    email: &str,
    password: &str,
) -> DomainResult<(String, String)> {
    let name = name.trim();
    if !has_min_chars(name, MIN_NAME_CHARS) {
        return Err(DomainError::validation(format!(
            "Nome deve ter pelo menos {} caracteres",
            MIN_NAME_CHARS
        )));
    }

    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(DomainError::validation("Email inválido"));
    }

    if !has_min_chars(password, MIN_PASSWORD_CHARS) {
        return Err(DomainError::validation(format!(
            "Senha deve ter pelo menos {} caracteres",
            MIN_PASSWORD_CHARS
        )));
    }

    Ok((name.to_string(), email))
}
