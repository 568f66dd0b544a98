//! Invite orchestration: sign a token, build the email, dispatch it.

use std::sync::Arc;

use tokio_retry::RetryIf;
use tokio_retry::strategy::FixedInterval;
use tracing::Instrument;

use crate::config::{ConfigSource, FROM_EMAIL, HOSTNAME, JWT_SECRET, POSTMARK_TEMPLATE_ID};
use crate::domain::entities::{Account, Acknowledgment, EmailMessage};
use crate::domain::providers::{EmailDispatcher, TokenSigner};
use crate::error::AppError;

/// Extra dispatch attempts after the first one fails.
pub const SEND_RETRIES: usize = 3;

/// Result of the dispatch stage once delivery errors have been narrowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryReport {
    /// The provider accepted the message.
    Sent(Acknowledgment),
    /// Every attempt failed; `reason` was printed to stderr.
    Undelivered { reason: String },
}

/// Runs the invite pipeline for a single account.
///
/// Stages run strictly in order and each one may abort the rest:
///
/// 1. log intent
/// 2. resolve `JWT_SECRET` and sign the account identity
/// 3. resolve `HOSTNAME`, `FROM_EMAIL`, `POSTMARK_TEMPLATE_ID`
/// 4. build the [`EmailMessage`]
/// 5. dispatch with up to [`SEND_RETRIES`] immediate re-attempts
pub struct InviteService<S, D, C>
where
    S: TokenSigner,
    D: EmailDispatcher,
    C: ConfigSource + ?Sized,
{
    signer: Arc<S>,
    dispatcher: Arc<D>,
    config: Arc<C>,
}

impl<S, D, C> InviteService<S, D, C>
where
    S: TokenSigner,
    D: EmailDispatcher,
    C: ConfigSource + ?Sized,
{
    pub fn new(signer: Arc<S>, dispatcher: Arc<D>, config: Arc<C>) -> Self {
        Self {
            signer,
            dispatcher,
            config,
        }
    }

    /// Signs a token for `account` and emails it the invite link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::MissingConfig`] if a required value is absent and
    /// [`AppError::Sign`] if signing fails. In both cases nothing is sent.
    /// Delivery failures are not errors here; they come back as
    /// [`DeliveryReport::Undelivered`].
    pub async fn send_invite(&self, account: &Account) -> Result<DeliveryReport, AppError> {
        tracing::info!("Sending email to {}...", account.contact_email);

        let secret = self.config.get(JWT_SECRET)?;
        let token = self.signer.sign(&account.identity(), &secret)?;

        let hostname = self.config.get(HOSTNAME)?;
        let from = self.config.get(FROM_EMAIL)?;
        let template_alias = self.config.get(POSTMARK_TEMPLATE_ID)?;

        let message = EmailMessage::partner_invite(account, &token, &hostname, from, template_alias);

        self.dispatch(&message)
            .instrument(tracing::info_span!("send-email", to = %message.to))
            .await
    }

    /// Sends `message`, retrying delivery failures, then narrows a final
    /// delivery failure into [`DeliveryReport::Undelivered`].
    async fn dispatch(&self, message: &EmailMessage) -> Result<DeliveryReport, AppError> {
        let dispatcher = &self.dispatcher;
        let strategy = FixedInterval::from_millis(0).take(SEND_RETRIES);
        let mut attempt = 0usize;

        let result = RetryIf::spawn(
            strategy,
            move || {
                attempt += 1;
                async move {
                    match dispatcher.send(message).await {
                        Ok(ack) => {
                            tracing::info!(attempt, message_id = %ack.message_id, "Email sent!");
                            Ok(ack)
                        }
                        Err(e) => {
                            tracing::info!(attempt, error = %e, "Email failed to send");
                            Err(e)
                        }
                    }
                }
            },
            AppError::is_retryable,
        )
        .await;

        match result {
            Ok(ack) => Ok(DeliveryReport::Sent(ack)),
            Err(e @ AppError::Delivery(_)) => {
                let reason = e.to_string();
                eprintln!("{reason}");
                Ok(DeliveryReport::Undelivered { reason })
            }
            Err(e) => Err(e),
        }
    }
}
