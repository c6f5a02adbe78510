//! Main token service implementation

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::domain::value_objects::Identity;
use crate::errors::DomainError;
use crate::services::clock::{Clock, SystemClock};

use super::config::TokenServiceConfig;

/// Service for signing and verifying session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Time source for the `exp`/`nbf` checks
    clock: Arc<dyn Clock>,
}

impl TokenService {
    /// Creates a token service reading the system clock
    pub fn new(config: TokenServiceConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a token service with an injected clock
    pub fn with_clock(config: TokenServiceConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        // Validity window is checked against `clock` in `verify`
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Token lifetime in seconds
    pub fn expiry_seconds(&self) -> i64 {
        self.config.token_expiry_seconds
    }

    /// Signs a token for `identity`, valid from `now` for the configured lifetime
    ///
    /// # Returns
    ///
    /// The encoded token and its expiry
    pub fn issue(
        &self,
        identity: Identity,
        now: DateTime<Utc>,
    ) -> Result<(String, DateTime<Utc>), DomainError> {
        let lifetime = Duration::seconds(self.config.token_expiry_seconds);
        let claims = Claims::new(
            identity.user_id,
            identity.role,
            &self.config.issuer,
            &self.config.audience,
            now,
            lifetime,
        );
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| DomainError::internal(format!("token signing failed: {}", e)))?;
        Ok((token, now + lifetime))
    }

    /// Verifies signature, issuer, audience and validity window
    ///
    /// # Errors
    ///
    /// `Unauthorized` for any malformed, foreign, premature or expired token
    pub fn verify(&self, token: &str) -> Result<Identity, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::unauthorized("token inválido"))?;

        let claims = token_data.claims;
        let now = self.clock.now().timestamp();
        if claims.exp < now {
            return Err(DomainError::unauthorized("token expirado"));
        }
        if claims.nbf > now {
            return Err(DomainError::unauthorized("token ainda não é válido"));
        }

        let user_id = claims
            .user_id()
            .map_err(|_| DomainError::unauthorized("token inválido"))?;
        Ok(Identity::new(user_id, claims.role))
    }
}
