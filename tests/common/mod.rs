#![allow(dead_code)]

use partner_invite::config::{
    Config, FROM_EMAIL, HOSTNAME, JWT_SECRET, POSTMARK_KEY, POSTMARK_TEMPLATE_ID, StaticSource,
};
use partner_invite::domain::entities::Account;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockBuilder, MockServer};

pub const SECRET: &str = "integration-secret";
pub const SERVER_TOKEN: &str = "server-token";

pub fn partner() -> Account {
    Account::new("17006", "PARTNER", "mrevanzak@gmail.com", "John Doe")
}

pub fn full_source() -> StaticSource {
    StaticSource::new()
        .with(JWT_SECRET, SECRET)
        .with(POSTMARK_KEY, SERVER_TOKEN)
        .with(POSTMARK_TEMPLATE_ID, "partner-invite")
        .with(HOSTNAME, "https://example.com")
        .with(FROM_EMAIL, "noreply@example.com")
}

pub fn config_for(server: &MockServer) -> Config {
    Config {
        postmark_api_url: server.uri(),
        ..Config::default()
    }
}

/// Matches a templated send authenticated with [`SERVER_TOKEN`].
pub fn templated_send() -> MockBuilder {
    Mock::given(method("POST"))
        .and(path("/email/withTemplate"))
        .and(header("X-Postmark-Server-Token", SERVER_TOKEN))
}

pub fn sent_body(to: &str) -> Value {
    json!({
        "To": to,
        "SubmittedAt": "2024-03-01T10:00:00.1234567-05:00",
        "MessageID": "b7bc2f4a-e38e-4336-af7d-e6c392c2f817",
        "ErrorCode": 0,
        "Message": "OK"
    })
}

pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| r.body_json::<Value>().unwrap())
        .collect()
}
