//! Headless series between the bot and another agent.

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tictactoe_bots::arena::run_series;
use tictactoe_bots::{Agent, Bot, CenterFirst, RandomAgent, Strategy, Tally};
use tracing::{info, instrument};

/// Opponents available to the `duel` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OpponentKind {
    /// Full game-tree search.
    Minimax,
    /// Bot-only depth-first probe.
    DepthFirst,
    /// Uniformly random legal moves.
    Random,
    /// Center when free, else the lowest empty square.
    CenterFirst,
}

impl OpponentKind {
    fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        match self {
            OpponentKind::Minimax => Box::new(Bot::seeded(Strategy::Minimax, seed)),
            OpponentKind::DepthFirst => Box::new(Bot::seeded(Strategy::DepthFirst, seed)),
            OpponentKind::Random => Box::new(RandomAgent::new(rng_from(seed))),
            OpponentKind::CenterFirst => Box::new(CenterFirst),
        }
    }
}

/// Result of a series, from the bot's side.
#[derive(Debug, Clone, Serialize)]
pub struct DuelReport {
    /// Strategy the bot (O) played.
    pub bot: Strategy,
    /// Opponent (X).
    pub opponent: OpponentKind,
    /// Games played.
    pub games: u32,
    /// Games the bot won.
    pub bot_wins: u32,
    /// Games the opponent won.
    pub opponent_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl DuelReport {
    fn new(bot: Strategy, opponent: OpponentKind, tally: Tally) -> Self {
        Self {
            bot,
            opponent,
            games: tally.games(),
            bot_wins: tally.o_wins,
            opponent_wins: tally.x_wins,
            draws: tally.draws,
        }
    }
}

impl std::fmt::Display for DuelReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (O) vs {} (X), {} games", self.bot, self.opponent, self.games)?;
        writeln!(f, "  bot wins:      {}", self.bot_wins)?;
        writeln!(f, "  opponent wins: {}", self.opponent_wins)?;
        write!(f, "  draws:         {}", self.draws)
    }
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Plays the series and returns the report.
#[instrument]
pub fn run_duel(
    bot: Strategy,
    opponent: OpponentKind,
    games: u32,
    seed: Option<u64>,
) -> Result<DuelReport> {
    // Distinct streams so the agents don't mirror the starter draws.
    let mut starters = rng_from(seed);
    let mut bot_agent = Bot::seeded(bot, seed.map(|s| s.wrapping_add(1)));
    let mut opponent_agent = opponent.build(seed.map(|s| s.wrapping_add(2)));

    let tally = run_series(opponent_agent.as_mut(), &mut bot_agent, games, &mut starters)
        .context("Duel aborted")?;

    let report = DuelReport::new(bot, opponent, tally);
    info!(
        bot_wins = report.bot_wins,
        opponent_wins = report.opponent_wins,
        draws = report.draws,
        "Duel finished"
    );
    Ok(report)
}

/// Prints the report as text or JSON.
pub fn print_report(report: &DuelReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
