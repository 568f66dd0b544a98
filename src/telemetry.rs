//! Tracing subscriber setup.

use crate::config::Config;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// The filter comes from [`Config::log_level`] (`RUST_LOG` syntax); output is
/// plain text or JSON lines depending on [`Config::log_format`]. Logs go to
/// stdout, leaving stderr for the error channel.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is
/// already installed.
pub fn init(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;

    if config.is_json_logging() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    Ok(())
}
