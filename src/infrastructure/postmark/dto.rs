//! Wire types for the Postmark `/email/withTemplate` endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Acknowledgment, EmailMessage, TemplateModel};

/// Request body for a templated send.
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TemplatedMessage<'a> {
    pub template_alias: &'a str,
    pub template_model: &'a TemplateModel,
    pub from: &'a str,
    pub to: &'a str,
}

impl<'a> From<&'a EmailMessage> for TemplatedMessage<'a> {
    fn from(message: &'a EmailMessage) -> Self {
        Self {
            template_alias: &message.template_alias,
            template_model: &message.model,
            from: &message.from,
            to: &message.to,
        }
    }
}

/// Successful send response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MessageSendingResponse {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub submitted_at: String,
    #[serde(rename = "MessageID", default)]
    pub message_id: String,
    pub error_code: i64,
    #[serde(default)]
    pub message: String,
}

impl From<MessageSendingResponse> for Acknowledgment {
    fn from(response: MessageSendingResponse) -> Self {
        Self {
            to: response.to,
            submitted_at: response.submitted_at,
            message_id: response.message_id,
            error_code: response.error_code,
            message: response.message,
        }
    }
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    pub error_code: i64,
    pub message: String,
}
