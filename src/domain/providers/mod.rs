//! Provider trait definitions for the domain layer.
//!
//! These traits abstract the two external services the invite pipeline
//! consumes. Concrete providers live in `crate::infrastructure`, and mock
//! implementations are generated via `mockall` for testing.
//!
//! # Available Providers
//!
//! - [`TokenSigner`] - Bearer token issuance
//! - [`EmailDispatcher`] - Templated email delivery

pub mod email_dispatcher;
pub mod token_signer;

pub use email_dispatcher::EmailDispatcher;
pub use token_signer::TokenSigner;

#[cfg(test)]
pub use email_dispatcher::MockEmailDispatcher;
#[cfg(test)]
pub use token_signer::MockTokenSigner;
