//! Business logic services for the application layer.

pub mod invite_service;

pub use invite_service::{DeliveryReport, InviteService, SEND_RETRIES};
