//! Core domain entities.
//!
//! Plain value records created once per run and never persisted.
//!
//! # Entity Types
//!
//! - [`Account`] - The recipient, with the [`Identity`] signed into the token
//! - [`SignedToken`] - Opaque bearer token
//! - [`EmailMessage`] - Templated invite email with its [`TemplateModel`]
//! - [`Acknowledgment`] - Provider confirmation of acceptance

pub mod account;
pub mod email_message;
pub mod signed_token;

pub use account::{Account, Identity};
pub use email_message::{Acknowledgment, EmailMessage, SUBMIT_PATH, TemplateModel};
pub use signed_token::SignedToken;
