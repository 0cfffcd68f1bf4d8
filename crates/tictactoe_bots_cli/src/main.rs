//! tictactoe-bots - play tic-tac-toe against a search-based bot.
//!
//! `play` opens the board in the terminal; `duel` runs a headless series.

#![warn(missing_docs)]

mod cli;
mod config;
mod duel;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use std::path::PathBuf;
use tictactoe_bots::{Player, Strategy};
use tracing::instrument;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            strategy,
            human,
            delay_ms,
            seed,
            log_file,
        } => run_play(config, human, strategy, delay_ms, seed, log_file),
        Command::Duel {
            bot,
            opponent,
            games,
            seed,
            json,
        } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let report = duel::run_duel(bot, opponent, games, seed)?;
            duel::print_report(&report, json)
        }
    }
}

/// Resolves the configuration and opens the terminal board.
#[instrument(skip_all)]
fn run_play(
    config_path: Option<PathBuf>,
    human: Option<Player>,
    strategy: Option<Strategy>,
    delay_ms: Option<u64>,
    seed: Option<u64>,
    log_file: Option<PathBuf>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => GameConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => GameConfig::default(),
    };
    let config = config.overridden(human, strategy, delay_ms, seed, log_file);

    tui::run_tui(config)
}
