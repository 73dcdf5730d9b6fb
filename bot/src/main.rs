//! Main entry point for the holdem bot client.

use holdem_bot::{cli, client, config};

use anyhow::Context;
use clap::Parser;
use config::Config;
use std::path::PathBuf;

/// Minimal client entrypoint: parse CLI args, load config and play.
///
/// Usage:
///   holdem-bot [--config PATH] [--server ADDR] [--user NAME] [--password PW]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::BotCli::parse();

    // If debug is on: show everything at DEBUG level.
    // If debug is off: our crates at INFO, everything else at WARN/ERROR.
    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "holdem_bot=info,holdem_shared=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(cli.debug)
        .with_thread_ids(cli.debug)
        .with_file(cli.debug)
        .with_line_number(cli.debug)
        .init();

    let config_path: PathBuf = cli.config.clone();

    // Load or create config file (creates file if missing).
    let mut cfg = Config::load_or_create(&config_path)
        .with_context(|| format!("loading or creating config '{}'", config_path.display()))?;

    // Apply CLI overrides in-memory (non-persistent by default)
    if let Some(server) = cli.server {
        cfg.server = server;
    }
    if let Some(user) = cli.user {
        cfg.user = user;
    }
    if let Some(password) = cli.password {
        cfg.password = password;
    }

    // Persist overrides only if requested
    if cli.persist {
        cfg.save(&config_path)
            .with_context(|| format!("saving updated config '{}'", config_path.display()))?;
    }

    tracing::info!(config = %config_path.display(), server = %cfg.server, user = %cfg.user);

    client::run(&cfg).await
}
