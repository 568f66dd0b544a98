//! Email delivery through the Postmark HTTP API.

mod dto;
mod postmark_client;

pub use dto::{ErrorResponse, MessageSendingResponse, TemplatedMessage};
pub use postmark_client::{PostmarkClient, SERVER_TOKEN_HEADER};
