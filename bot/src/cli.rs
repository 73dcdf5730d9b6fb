use clap::Parser;
use std::path::PathBuf;

/// CLI for the holdem bot client.
#[derive(Parser, Debug, Clone)]
#[command(name = "holdem-bot", version, about = "Automated holdem dojo player")]
pub struct BotCli {
    /// Path to config file
    #[arg(long, default_value = "holdem-bot.toml")]
    pub config: PathBuf,

    /// Game server address (overrides config)
    #[arg(long)]
    pub server: Option<String>,

    /// Seat name to play as (overrides config)
    #[arg(long)]
    pub user: Option<String>,

    /// Password for the seat (overrides config)
    #[arg(long)]
    pub password: Option<String>,

    /// Persist CLI overrides back to the config file
    #[arg(long, default_value_t = false)]
    pub persist: bool,

    /// Verbose diagnostics
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
