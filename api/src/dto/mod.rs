pub mod auth;
pub mod ticket;

pub use auth::*;
pub use ticket::*;

use validator::ValidationErrors;

/// First human-readable message out of a validator failure
pub(crate) fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{}: {}", field, e.code))
            })
        })
        .next()
        .unwrap_or_else(|| "Dados inválidos".to_string())
}
