//! Error taxonomy for the invite pipeline.
//!
//! Every failure the pipeline can hit is one of four kinds. The orchestrator
//! matches on them exhaustively to decide what gets retried, what gets
//! narrowed to a printed message, and what ends the run.

use std::time::Duration;

/// Errors produced by configuration, signing, delivery, or the run deadline.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    /// A required configuration value is absent from the environment.
    #[error("Missing config on environment: {name}")]
    MissingConfig { name: String },

    /// The token signer rejected the payload or secret.
    #[error("Failed to sign token: {0}")]
    Sign(String),

    /// The email provider rejected the message or could not be reached.
    #[error("Failed to send email: {0}")]
    Delivery(String),

    /// The whole run exceeded its wall-clock budget.
    #[error("{} seconds timeout reached", .0.as_secs())]
    Timeout(Duration),
}

impl AppError {
    pub fn missing_config(name: impl Into<String>) -> Self {
        Self::MissingConfig { name: name.into() }
    }

    pub fn sign(cause: impl Into<String>) -> Self {
        Self::Sign(cause.into())
    }

    pub fn delivery(cause: impl Into<String>) -> Self {
        Self::Delivery(cause.into())
    }

    /// Only delivery failures are assumed transient; the rest are
    /// deterministic for the same inputs.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Delivery(_))
    }
}
