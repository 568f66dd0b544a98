//! Templated email message and provider acknowledgment.

use serde::{Deserialize, Serialize};

use super::{Account, SignedToken};

/// Path on the partner site that consumes the invite token.
pub const SUBMIT_PATH: &str = "/submit-partner";

/// Values substituted into the provider-hosted template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateModel {
    pub name: String,
    pub url: String,
    pub web_page: String,
}

/// An email rendered by the provider from a stored template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub template_alias: String,
    pub from: String,
    pub to: String,
    pub model: TemplateModel,
}

impl EmailMessage {
    /// Builds the invite email for `account`.
    ///
    /// The link is `<hostname>/submit-partner?token=<token>`; a trailing slash
    /// on `hostname` is dropped before joining.
    ///
    /// # Examples
    ///
    /// ```
    /// use partner_invite::domain::entities::{Account, EmailMessage, SignedToken};
    ///
    /// let account = Account::new("17006", "PARTNER", "partner@example.com", "John Doe");
    /// let message = EmailMessage::partner_invite(
    ///     &account,
    ///     &SignedToken::new("TOKEN123"),
    ///     "https://example.com",
    ///     "noreply@example.com",
    ///     "partner-invite",
    /// );
    ///
    /// assert_eq!(message.model.url, "https://example.com/submit-partner?token=TOKEN123");
    /// ```
    pub fn partner_invite(
        account: &Account,
        token: &SignedToken,
        hostname: &str,
        from: impl Into<String>,
        template_alias: impl Into<String>,
    ) -> Self {
        let url = format!(
            "{}{}?token={}",
            hostname.trim_end_matches('/'),
            SUBMIT_PATH,
            token.as_str()
        );

        Self {
            template_alias: template_alias.into(),
            from: from.into(),
            to: account.contact_email.clone(),
            model: TemplateModel {
                name: account.display_name.clone(),
                url,
                web_page: hostname.to_string(),
            },
        }
    }
}

/// Provider confirmation that a message was accepted for delivery.
///
/// Acceptance is not proof of final delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgment {
    pub to: String,
    pub submitted_at: String,
    pub message_id: String,
    pub error_code: i64,
    pub message: String,
}
