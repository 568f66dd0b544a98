//! Provider trait for issuing bearer tokens.

use crate::domain::entities::{Identity, SignedToken};
use crate::error::AppError;

/// Signs identity claims into a time-limited bearer token.
///
/// # Implementations
///
/// - [`crate::infrastructure::jwt::JwtSigner`] - HS256 JWT, 30 day validity
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait TokenSigner: Send + Sync {
    /// Signs `identity` with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Sign`] if the secret is rejected or encoding fails.
    /// The failure is deterministic for the same inputs and is never retried.
    fn sign(&self, identity: &Identity, secret: &str) -> Result<SignedToken, AppError>;
}
