//! Domain layer containing entities and provider contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Value records flowing through the pipeline
//! - [`providers`] - Trait definitions for the token signer and email dispatcher
//!
//! The domain layer has no dependencies on infrastructure. Orchestration lives
//! in [`crate::application::services`].

pub mod entities;
pub mod providers;
