//! Strategy selection for the computer player.

use crate::search::{self, SearchError};
use crate::{Board, Player};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Search strategy the bot plays with.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Strategy {
    /// Full adversarial game-tree search.
    #[default]
    Minimax,
    /// Bot-only depth-first probe with a random fallback.
    DepthFirst,
}

/// Computer player: a strategy plus the randomness it may need.
///
/// Minimax is deterministic and never touches the generator. The
/// depth-first probe draws from it for its fallback move.
#[derive(Debug, Clone)]
pub struct Bot<R = StdRng> {
    strategy: Strategy,
    rng: R,
}

impl Bot<StdRng> {
    /// Creates a bot whose randomness is seeded from `seed`, or from the
    /// operating system when no seed is given.
    pub fn seeded(strategy: Strategy, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::new(strategy, rng)
    }
}

impl<R: rand::Rng> Bot<R> {
    /// Creates a bot drawing from `rng`.
    pub fn new(strategy: Strategy, rng: R) -> Self {
        Self { strategy, rng }
    }

    /// The strategy this bot plays.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Chooses a move for `mark` on `board` without modifying it.
    #[instrument(skip(self, board), fields(strategy = %self.strategy))]
    pub fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, SearchError> {
        let mv = match self.strategy {
            Strategy::Minimax => search::choose_move_minimax(board, mark, mark.opponent())?,
            Strategy::DepthFirst => search::choose_move_heuristic(board, mark, &mut self.rng)?,
        };
        info!(position = mv, "Bot chose position");
        Ok(mv)
    }
}
