//! Provider trait for templated email delivery.

use crate::domain::entities::{Acknowledgment, EmailMessage};
use crate::error::AppError;
use async_trait::async_trait;

/// Sends a templated email through a delivery provider.
///
/// A call is exactly one attempt. Retry policy belongs to the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::postmark::PostmarkClient`] - Postmark HTTP API
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    /// Sends `message` and returns the provider acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Delivery`] if the provider rejects the message or
    /// cannot be reached.
    async fn send(&self, message: &EmailMessage) -> Result<Acknowledgment, AppError>;
}
