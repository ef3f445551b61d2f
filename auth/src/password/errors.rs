use thiserror::Error;

/// Error type for password operations.
///
/// Verification has no error variant: a hash that cannot be parsed
/// verifies as a mismatch.
#[derive(Debug, Clone, Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
