//! Credential infrastructure library
//!
//! Provides the two credential primitives the identity service composes:
//! - Password hashing (Argon2id)
//! - Bearer token issuance (signed JWT)
//!
//! The service defines its own workflows and adapts these implementations.
//! Keeping them here avoids coupling domain logic to cryptographic detail.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::TokenIssuer;
//!
//! let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!");
//! let token = issuer.issue("account123").unwrap();
//! let claims = issuer.decode(&token).unwrap();
//! assert_eq!(claims.sub, "account123");
//! ```

pub mod password;
pub mod token;

// Re-export commonly used items
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::AccessClaims;
pub use token::TokenError;
pub use token::TokenIssuer;
