//! Sends the partner invite email for the configured account.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! The target account is fixed below; edit it to invite someone else.
//! Required and optional environment variables are listed in
//! [`partner_invite::config`]. A `.env` file in the working directory is
//! loaded first.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use partner_invite::config::{self, EnvSource};
use partner_invite::domain::entities::Account;
use partner_invite::{runner, telemetry};

/// Signs a partner token and emails the partner their invite link.
#[derive(Parser)]
#[command(name = "partner-invite")]
#[command(author, version, about, long_about = None)]
struct Cli {}

/// The account the invite is sent to.
fn target_account() -> Account {
    Account::new("17006", "PARTNER", "mrevanzak@gmail.com", "John Doe")
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let _cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init(&config)?;
    config.print_summary();

    let outcome = runner::run(&config, Arc::new(EnvSource), &target_account()).await;
    outcome.report();

    Ok(())
}
