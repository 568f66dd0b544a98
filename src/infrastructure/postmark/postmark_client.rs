//! Postmark email dispatcher implementation using reqwest.

use async_trait::async_trait;
use reqwest::Client;

use super::dto::{ErrorResponse, MessageSendingResponse, TemplatedMessage};
use crate::config::{ConfigSource, POSTMARK_KEY, mask_secret};
use crate::domain::entities::{Acknowledgment, EmailMessage};
use crate::domain::providers::EmailDispatcher;
use crate::error::AppError;

/// Header carrying the Postmark server token.
pub const SERVER_TOKEN_HEADER: &str = "X-Postmark-Server-Token";

/// Postmark API client for templated sends.
///
/// Each [`EmailDispatcher::send`] call is a single HTTP request to
/// `POST {api_url}/email/withTemplate`.
#[derive(Clone)]
pub struct PostmarkClient {
    client: Client,
    server_token: String,
    api_url: String,
}

impl PostmarkClient {
    /// Creates a client for `api_url` (no trailing slash) authenticated with `server_token`.
    pub fn new(server_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            server_token: server_token.into(),
            api_url: api_url.into(),
        }
    }

    /// Creates a client, resolving the server token from `POSTMARK_KEY`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingConfig`] if `POSTMARK_KEY` is not set.
    pub fn from_config<C>(config: &C, api_url: &str) -> Result<Self, AppError>
    where
        C: ConfigSource + ?Sized,
    {
        let server_token = config.get(POSTMARK_KEY)?;

        tracing::debug!(
            api_url,
            server_token = %mask_secret(&server_token),
            "Postmark client configured"
        );

        Ok(Self::new(server_token, api_url))
    }

    fn endpoint(&self) -> String {
        format!("{}/email/withTemplate", self.api_url)
    }
}

#[async_trait]
impl EmailDispatcher for PostmarkClient {
    async fn send(&self, message: &EmailMessage) -> Result<Acknowledgment, AppError> {
        let response = self
            .client
            .post(self.endpoint())
            .header("Accept", "application/json")
            .header(SERVER_TOKEN_HEADER, &self.server_token)
            .json(&TemplatedMessage::from(message))
            .send()
            .await
            .map_err(|e| AppError::delivery(format!("Postmark request failed: {e}")))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| format!("{} (code {})", e.message, e.error_code))
                .unwrap_or(body);
            return Err(AppError::delivery(format!(
                "Postmark returned {status}: {reason}"
            )));
        }

        let sent = response
            .json::<MessageSendingResponse>()
            .await
            .map_err(|e| AppError::delivery(format!("Invalid Postmark response: {e}")))?;

        if sent.error_code != 0 {
            return Err(AppError::delivery(format!(
                "Postmark rejected message: {} (code {})",
                sent.message, sent.error_code
            )));
        }

        Ok(sent.into())
    }
}
