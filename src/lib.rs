//! # Partner Invite
//!
//! One-shot tool that signs a bearer token for a partner account and emails
//! the partner a templated invite link through Postmark.
//!
//! ## Architecture
//!
//! The crate follows the same layer separation as a service, scaled down to a
//! single linear run:
//!
//! - **Domain Layer** ([`domain`]) - Entities and provider traits
//! - **Application Layer** ([`application`]) - The invite pipeline and its retry policy
//! - **Infrastructure Layer** ([`infrastructure`]) - JWT signing and the Postmark client
//! - **Runner** ([`runner`]) - Wiring, the run deadline, and terminal reporting
//!
//! ## Pipeline
//!
//! 1. Log intent
//! 2. Sign `{uid, type}` with `JWT_SECRET` (30 day validity)
//! 3. Resolve `HOSTNAME`, `FROM_EMAIL`, `POSTMARK_TEMPLATE_ID`
//! 4. Build the invite message
//! 5. Send through Postmark, up to 4 attempts, inside a `send-email` span
//!
//! The whole run is bounded by a 3 second deadline. Every terminal state is
//! handled and logged; none crashes the process.
//!
//! ## Quick Start
//!
//! ```bash
//! export JWT_SECRET="..."
//! export POSTMARK_KEY="..."
//! export POSTMARK_TEMPLATE_ID="partner-invite"
//! export HOSTNAME="https://example.com"
//! export FROM_EMAIL="noreply@example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the named values and optional runtime settings.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub mod config;
pub mod runner;
pub mod telemetry;

pub use error::AppError;
pub use runner::RunOutcome;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DeliveryReport, InviteService};
    pub use crate::config::{Config, ConfigSource, EnvSource, StaticSource};
    pub use crate::domain::entities::{Account, Acknowledgment, EmailMessage, SignedToken};
    pub use crate::domain::providers::{EmailDispatcher, TokenSigner};
    pub use crate::error::AppError;
    pub use crate::infrastructure::jwt::JwtSigner;
    pub use crate::infrastructure::postmark::PostmarkClient;
    pub use crate::runner::RunOutcome;
}
