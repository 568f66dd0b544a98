//! Infrastructure layer: concrete providers for the domain traits.
//!
//! - [`jwt`] - [`crate::domain::providers::TokenSigner`] backed by `jsonwebtoken`
//! - [`postmark`] - [`crate::domain::providers::EmailDispatcher`] backed by the Postmark API

pub mod jwt;
pub mod postmark;
