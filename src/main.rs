//! # Campus Market
//!
//! Terminal client for the campus second-hand marketplace.
//!
//! This is the application entry point that initializes:
//! - Tracing/logging subsystem
//! - Configuration loading
//! - Local storage and the stored session
//! - The requested page

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};

use campus_market::config::Settings;
use campus_market::presentation::cli::Cli;
use campus_market::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber for structured logging
    campus_market::telemetry::init_tracing();

    // Load configuration from environment and config files
    let settings = Settings::load()?;
    info!(
        api = %settings.api.base_url,
        environment = %settings.environment,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;
    if let Some(lang) = cli.lang {
        application.context().i18n.override_lang(lang);
    }

    debug!(command = ?cli.command, "Running command");
    let output = application.run(cli.command).await?;
    print!("{}", output);

    Ok(())
}
