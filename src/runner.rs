//! Run lifecycle: wire the providers, bound the pipeline by a deadline, and
//! report the terminal state.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::application::services::{DeliveryReport, InviteService};
use crate::config::{Config, ConfigSource};
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::infrastructure::jwt::JwtSigner;
use crate::infrastructure::postmark::PostmarkClient;

/// Wall-clock budget for the whole pipeline, measured from its start.
pub const RUN_TIMEOUT: Duration = Duration::from_secs(3);

/// Terminal state of a run. Every variant is a handled outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The pipeline finished; delivery may still have been narrowed to a
    /// printed failure.
    Completed(DeliveryReport),
    /// The pipeline aborted with a config, signing, or timeout error.
    Failed(AppError),
}

impl RunOutcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Completed(DeliveryReport::Sent(_)))
    }

    /// Writes the outcome to its channel.
    ///
    /// Failures go to stderr. Undelivered reports were already printed when
    /// they were narrowed, so they are only traced here.
    pub fn report(&self) {
        match self {
            Self::Completed(DeliveryReport::Sent(ack)) => {
                tracing::info!(to = %ack.to, message_id = %ack.message_id, "Invite delivered");
            }
            Self::Completed(DeliveryReport::Undelivered { reason }) => {
                tracing::warn!(%reason, "Invite not delivered");
            }
            Self::Failed(e) => {
                eprintln!("{e}");
            }
        }
    }
}

/// Races `pipeline` against `deadline`.
///
/// When the deadline wins the pipeline future is dropped wherever it is
/// suspended, including mid-request. The provider may still have received
/// the message.
pub async fn with_deadline<F>(deadline: Duration, pipeline: F) -> RunOutcome
where
    F: Future<Output = Result<DeliveryReport, AppError>>,
{
    match tokio::time::timeout(deadline, pipeline).await {
        Ok(Ok(report)) => RunOutcome::Completed(report),
        Ok(Err(e)) => RunOutcome::Failed(e),
        Err(_) => {
            tracing::error!(?deadline, "Deadline elapsed before the run finished");
            RunOutcome::Failed(AppError::Timeout(deadline))
        }
    }
}

/// Runs the invite pipeline for `account` within [`RUN_TIMEOUT`].
///
/// The Postmark client is built inside the deadline so that lazily resolved
/// configuration is covered by it.
pub async fn run<C>(config: &Config, source: Arc<C>, account: &Account) -> RunOutcome
where
    C: ConfigSource + ?Sized,
{
    with_deadline(RUN_TIMEOUT, async {
        let dispatcher = PostmarkClient::from_config(&*source, &config.postmark_api_url)?;
        let service = InviteService::new(Arc::new(JwtSigner::new()), Arc::new(dispatcher), source);
        service.send_invite(account).await
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{POSTMARK_KEY, StaticSource};
    use crate::domain::entities::Acknowledgment;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapses_on_stalled_pipeline() {
        let started = Instant::now();

        let outcome = with_deadline(RUN_TIMEOUT, std::future::pending()).await;

        assert_eq!(outcome, RunOutcome::Failed(AppError::Timeout(RUN_TIMEOUT)));
        assert!(started.elapsed() >= RUN_TIMEOUT);
        assert!(started.elapsed() < RUN_TIMEOUT + Duration::from_millis(100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_elapses_mid_stage() {
        let outcome = with_deadline(RUN_TIMEOUT, async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Err(AppError::missing_config("HOSTNAME"))
        })
        .await;

        // Timeout wins over the error the stage would have produced later.
        assert_eq!(outcome, RunOutcome::Failed(AppError::Timeout(RUN_TIMEOUT)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_completed_within_deadline() {
        let ack = Acknowledgment {
            to: "partner@example.com".to_string(),
            submitted_at: "2024-03-01T10:00:00Z".to_string(),
            message_id: "msg-1".to_string(),
            error_code: 0,
            message: "OK".to_string(),
        };
        let expected = ack.clone();

        let outcome = with_deadline(RUN_TIMEOUT, async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            Ok(DeliveryReport::Sent(ack))
        })
        .await;

        assert!(outcome.is_sent());
        assert_eq!(outcome, RunOutcome::Completed(DeliveryReport::Sent(expected)));
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let outcome = with_deadline(RUN_TIMEOUT, async { Err(AppError::sign("bad secret")) }).await;

        assert_eq!(outcome, RunOutcome::Failed(AppError::sign("bad secret")));
        assert!(!outcome.is_sent());
    }

    #[tokio::test]
    async fn test_run_fails_without_postmark_key() {
        let source = Arc::new(StaticSource::new());

        let account = Account::new("17006", "PARTNER", "partner@example.com", "John Doe");

        let outcome = run(&Config::default(), source, &account).await;

        assert_eq!(
            outcome,
            RunOutcome::Failed(AppError::missing_config(POSTMARK_KEY))
        );
    }
}
