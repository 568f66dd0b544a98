//! Application layer services implementing the invite workflow.
//!
//! This layer sequences provider calls and owns the resilience policy
//! (retry, error narrowing). Services consume the provider traits from
//! [`crate::domain::providers`] and know nothing about HTTP or JWT details.
//!
//! # Available Services
//!
//! - [`services::invite_service::InviteService`] - Token signing and invite dispatch

pub mod services;
