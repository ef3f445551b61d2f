use auth::PasswordError;
use auth::TokenError;
use thiserror::Error;

use crate::account::validation::ValidationErrors;

/// Top-level error for all account operations.
///
/// The four caller-facing kinds (`Validation`, `UsernameTaken`,
/// `NotFound`, `InvalidCredentials`) are terminal for the request and
/// never retried. `Storage` is the only kind a caller might legitimately
/// retry. No variant ever carries a credential hash or the signing
/// secret.
#[derive(Debug, Clone, Error)]
pub enum AccountError {
    // Caller input problems; the full field map rides along
    #[error("{0}")]
    Validation(ValidationErrors),

    // Domain-level errors
    #[error("Username '{0}' is already taken.")]
    UsernameTaken(String),

    #[error("User '{0}' not found.")]
    NotFound(String),

    #[error("Invalid credentials.")]
    InvalidCredentials,

    // Configuration-class faults (fatal to the request, not retried)
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    // Infrastructure errors, propagated as-is
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AccountError {
    /// Shortcut for a single-field validation failure.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = ValidationErrors::new();
        errors.push(field, message);
        AccountError::Validation(errors)
    }
}
