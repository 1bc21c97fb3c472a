//! facultad - electoral census and registry CLI
//!
//! Opens (or creates) the configured SQLite database, applies the schema and
//! runs one census or registry operation per invocation.

use anyhow::{Context, Result};
use clap::Parser;
use facultad_electoral::Facultad;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod config;

use cli::Cli;
use config::FacultadConfig;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = FacultadConfig::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.database.clone() {
        config = config.with_database_url(url);
    }
    if let Some(level) = cli.log_level.clone() {
        config.logging.level = level;
    }
    if cli.json {
        config.logging.json = true;
    }

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.logging.level.clone().into());

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!(storage = ?config.storage, "opening electoral store");
    let model = Facultad::open(&config.storage, config.registrar.clone())
        .await
        .context("opening electoral store")?;

    let output = commands::run(&model, cli.command).await?;
    println!("{output}");

    model.store().close().await;
    Ok(())
}
