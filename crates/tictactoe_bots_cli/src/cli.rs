//! Command-line interface for tictactoe-bots.

use crate::duel::OpponentKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_bots::{Player, Strategy};

/// Tic-tac-toe against a minimax or depth-first bot
#[derive(Parser, Debug)]
#[command(name = "tictactoe-bots")]
#[command(about = "Play tic-tac-toe against a search-based bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the bot in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Bot strategy (minimax or depth-first)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Mark you play with (x or o); the bot takes the other
        #[arg(long)]
        human: Option<Player>,

        /// Pause before the bot's move, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the starting player and the bot's random fallback
        #[arg(long)]
        seed: Option<u64>,

        /// File to write logs to (the terminal is taken by the board)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Run a headless series between the bot and another agent
    Duel {
        /// Bot strategy, playing O
        #[arg(short, long, default_value = "minimax")]
        bot: Strategy,

        /// Opponent playing X (minimax, depth-first, random or center-first)
        #[arg(short, long, default_value = "random")]
        opponent: OpponentKind,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for starting players and random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}
