//! Domain error taxonomy.
//!
//! Every service returns [`DomainResult`]; the HTTP layer maps each variant
//! to a status code in exactly one place. Messages are user-facing (the web
//! client is Portuguese) and, except for `Internal`, safe to show verbatim.

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Malformed or undersized input
    #[error("{message}")]
    Validation { message: String },

    #[error("Email já cadastrado")]
    DuplicateEmail,

    /// Same message whether the email is unknown or the password is wrong
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    /// Missing, malformed, foreign or expired token
    #[error("Não autorizado: {reason}")]
    Unauthorized { reason: String },

    #[error("Acesso negado: apenas administradores")]
    Forbidden,

    #[error("{resource} não encontrado")]
    NotFound { resource: String },

    #[error("Muitas requisições. Tente novamente em {retry_after_secs} segundos.")]
    RateLimited { retry_after_secs: u64 },

    /// Unexpected store or runtime failure; the message is for logs only
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
        }
    }

    pub fn unauthorized(reason: impl Into<String>) -> Self {
        DomainError::Unauthorized {
            reason: reason.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Whether this error stems from the caller rather than the server
    pub fn is_client_error(&self) -> bool {
        !matches!(self, DomainError::Internal { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(DomainError::not_found("Chamado").to_string(), "Chamado não encontrado");
        assert_eq!(
            DomainError::validation("Descrição muito curta").to_string(),
            "Descrição muito curta"
        );
        assert_eq!(
            DomainError::RateLimited { retry_after_secs: 12 }.to_string(),
            "Muitas requisições. Tente novamente em 12 segundos."
        );
    }

    #[test]
    fn test_only_internal_is_server_side() {
        assert!(DomainError::Forbidden.is_client_error());
        assert!(DomainError::InvalidCredentials.is_client_error());
        assert!(!DomainError::internal("db down").is_client_error());
    }
}
