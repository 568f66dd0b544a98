//! Configuration loaded from environment variables.
//!
//! Two kinds of configuration live here:
//!
//! - **Named values** the pipeline needs (`JWT_SECRET`, `POSTMARK_KEY`, ...),
//!   resolved lazily through a [`ConfigSource`] at the point each stage reads
//!   them. A missing value is [`AppError::MissingConfig`] and ends the run.
//! - **Runtime settings** ([`Config`]) for logging and the Postmark endpoint.
//!   These are optional, have defaults, and are validated once at startup.
//!
//! ## Required Variables
//!
//! ```bash
//! export JWT_SECRET="..."
//! export POSTMARK_KEY="..."
//! export POSTMARK_TEMPLATE_ID="partner-invite"
//! export HOSTNAME="https://example.com"
//! export FROM_EMAIL="noreply@example.com"
//! ```
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `POSTMARK_API_URL` - Postmark API base URL (default: `https://api.postmarkapp.com`)

use crate::error::AppError;
use anyhow::Result;
use std::collections::HashMap;
use std::env;
use url::Url;

pub const JWT_SECRET: &str = "JWT_SECRET";
pub const POSTMARK_KEY: &str = "POSTMARK_KEY";
pub const POSTMARK_TEMPLATE_ID: &str = "POSTMARK_TEMPLATE_ID";
pub const HOSTNAME: &str = "HOSTNAME";
pub const FROM_EMAIL: &str = "FROM_EMAIL";

/// Every name the pipeline resolves during a run.
pub const REQUIRED_KEYS: [&str; 5] = [
    JWT_SECRET,
    POSTMARK_KEY,
    POSTMARK_TEMPLATE_ID,
    HOSTNAME,
    FROM_EMAIL,
];

pub const DEFAULT_POSTMARK_API_URL: &str = "https://api.postmarkapp.com";

/// Resolves named string values.
///
/// # Implementations
///
/// - [`EnvSource`] - process environment, read on every call
/// - [`StaticSource`] - fixed in-memory map
///
/// # Errors
///
/// Returns [`AppError::MissingConfig`] carrying the name when it is absent.
pub trait ConfigSource: Send + Sync {
    fn get(&self, name: &str) -> Result<String, AppError>;
}

/// Reads named values from the process environment.
///
/// Nothing is cached, so a value changed between two reads is observed by the
/// second one. An empty string counts as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, name: &str) -> Result<String, AppError> {
        env::var(name).map_err(|_| AppError::missing_config(name))
    }
}

/// Resolves named values from a fixed map.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    values: HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a value.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Removes a value so that resolving it fails.
    pub fn without(mut self, name: &str) -> Self {
        self.values.remove(name);
        self
    }
}

impl ConfigSource for StaticSource {
    fn get(&self, name: &str) -> Result<String, AppError> {
        self.values
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::missing_config(name))
    }
}

/// Runtime settings loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_format: String,
    /// Base URL of the Postmark API, without the `/email/withTemplate` path.
    pub postmark_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            postmark_api_url: DEFAULT_POSTMARK_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads runtime settings from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let postmark_api_url = env::var("POSTMARK_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or(defaults.postmark_api_url);

        Self {
            log_level,
            log_format,
            postmark_api_url,
        }
    }

    /// Validates the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `postmark_api_url` is not an `http` or `https` URL
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let api_url = Url::parse(&self.postmark_api_url).map_err(|e| {
            anyhow::anyhow!(
                "POSTMARK_API_URL is not a valid URL ({}): '{}'",
                e,
                self.postmark_api_url
            )
        })?;

        if api_url.scheme() != "http" && api_url.scheme() != "https" {
            anyhow::bail!(
                "POSTMARK_API_URL must use http or https, got '{}'",
                self.postmark_api_url
            );
        }

        Ok(())
    }

    /// Returns whether logs are emitted as JSON lines.
    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Logs the settings summary.
    pub fn print_summary(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Log level: {}", self.log_level);
        tracing::debug!("  Log format: {}", self.log_format);
        tracing::debug!("  Postmark API: {}", self.postmark_api_url);
    }
}

/// Masks a secret for logging, keeping only the first four characters.
///
/// - `abcd-1234-efgh` → `abcd***`
/// - `abc` → `***`
pub fn mask_secret(secret: &str) -> String {
    match secret.char_indices().nth(4) {
        Some((idx, _)) => format!("{}***", &secret[..idx]),
        None => "***".to_string(),
    }
}

/// Loads and validates runtime settings from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_secret() {
        assert_eq!(mask_secret("abcd-1234-efgh"), "abcd***");
        assert_eq!(mask_secret("abcd"), "***");
        assert_eq!(mask_secret(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.postmark_api_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.postmark_api_url = "ftp://api.postmarkapp.com".to_string();
        assert!(config.validate().is_err());

        config.postmark_api_url = "http://127.0.0.1:8080".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_static_source_resolves_and_reports_missing() {
        let source = StaticSource::new()
            .with(HOSTNAME, "https://example.com")
            .with(FROM_EMAIL, "noreply@example.com");

        assert_eq!(source.get(HOSTNAME).unwrap(), "https://example.com");
        assert_eq!(
            source.get(JWT_SECRET).unwrap_err(),
            AppError::missing_config(JWT_SECRET)
        );

        let source = source.without(HOSTNAME);
        assert!(matches!(
            source.get(HOSTNAME),
            Err(AppError::MissingConfig { name }) if name == HOSTNAME
        ));
    }

    #[test]
    #[serial]
    fn test_env_source_reads_lazily() {
        let key = "PARTNER_INVITE_TEST_VALUE";

        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var(key);
        }
        assert_eq!(
            EnvSource.get(key).unwrap_err(),
            AppError::missing_config(key)
        );

        unsafe {
            env::set_var(key, "first");
        }
        assert_eq!(EnvSource.get(key).unwrap(), "first");

        unsafe {
            env::set_var(key, "second");
        }
        assert_eq!(EnvSource.get(key).unwrap(), "second");

        // Empty is still present
        unsafe {
            env::set_var(key, "");
        }
        assert_eq!(EnvSource.get(key).unwrap(), "");

        // Cleanup
        unsafe {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults_and_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("LOG_FORMAT");
            env::remove_var("POSTMARK_API_URL");
        }

        let config = Config::from_env();
        assert_eq!(config.log_format, "text");
        assert_eq!(config.postmark_api_url, DEFAULT_POSTMARK_API_URL);

        unsafe {
            env::set_var("LOG_FORMAT", "json");
            env::set_var("POSTMARK_API_URL", "http://localhost:9000/");
        }

        let config = load_from_env().unwrap();
        assert!(config.is_json_logging());
        assert_eq!(config.postmark_api_url, "http://localhost:9000");

        // Cleanup
        unsafe {
            env::remove_var("LOG_FORMAT");
            env::remove_var("POSTMARK_API_URL");
        }
    }
}
