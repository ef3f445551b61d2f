pub mod errors;
pub mod issuer;

pub use errors::TokenError;
pub use issuer::AccessClaims;
pub use issuer::TokenIssuer;
