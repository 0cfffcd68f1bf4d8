//! Headless games between two agents.
//!
//! Used by the `duel` command and by the tests that pit the bots against
//! scripted and exhaustive opponents.

use crate::search::SearchError;
use crate::{Board, Bot, GameSession, GameStatus, MoveError, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Anything that can pick a move for a given mark.
pub trait Agent {
    /// Chooses a move for `mark` on a board that still has empty squares.
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, SearchError>;

    /// Returns the agent's display name.
    fn name(&self) -> &str;
}

impl<R: Rng> Agent for Bot<R> {
    fn choose_move(&mut self, board: &Board, mark: Player) -> Result<usize, SearchError> {
        Bot::choose_move(self, board, mark)
    }

    fn name(&self) -> &str {
        self.strategy().into()
    }
}

/// Plays the center when it is free, otherwise the lowest empty square.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterFirst;

impl Agent for CenterFirst {
    fn choose_move(&mut self, board: &Board, _mark: Player) -> Result<usize, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::TerminalBoard);
        }
        if board.is_empty(4) {
            return Ok(4);
        }
        board
            .available_moves()
            .first()
            .copied()
            .ok_or(SearchError::TerminalBoard)
    }

    fn name(&self) -> &str {
        "center-first"
    }
}

/// Picks uniformly among the empty squares.
#[derive(Debug, Clone)]
pub struct RandomAgent<R> {
    rng: R,
}

impl<R: Rng> RandomAgent<R> {
    /// Creates an agent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent for RandomAgent<R> {
    fn choose_move(&mut self, board: &Board, _mark: Player) -> Result<usize, SearchError> {
        if board.is_terminal() {
            return Err(SearchError::TerminalBoard);
        }
        let moves = board.available_moves();
        Ok(moves[self.rng.random_range(0..moves.len())])
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Error raised while running a headless game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ArenaError {
    /// An agent could not produce a move.
    #[display("Agent failed to move: {}", _0)]
    Search(SearchError),
    /// An agent produced a move the session rejected.
    #[display("Agent played an illegal move: {}", _0)]
    IllegalMove(MoveError),
}

/// A finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Player who moved first.
    pub starter: Player,
    /// Indices in the order they were played.
    pub moves: Vec<usize>,
    /// Final status; never `InProgress`.
    pub status: GameStatus,
}

/// Win/draw counts over a series of games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Tally {
    /// Adds one finished game.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Plays one game to completion, `x` playing X and `o` playing O.
#[instrument(skip(x, o), fields(x = x.name(), o = o.name()))]
pub fn play_game(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    starter: Player,
) -> Result<GameRecord, ArenaError> {
    play_session(x, o, GameSession::new(starter))
}

fn play_session(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    mut session: GameSession,
) -> Result<GameRecord, ArenaError> {
    while !session.is_over() {
        let mark = session.to_move();
        let (index, name) = match mark {
            Player::X => (x.choose_move(session.board(), mark)?, x.name()),
            Player::O => (o.choose_move(session.board(), mark)?, o.name()),
        };
        debug!(agent = name, %mark, position = index, "Agent moved");
        session.play(mark, index)?;
    }

    Ok(GameRecord {
        starter: session.starter(),
        moves: session.history().to_vec(),
        status: session.status(),
    })
}

/// Plays `games` games, drawing each starting player from `rng`.
#[instrument(skip(x, o, rng), fields(x = x.name(), o = o.name()))]
pub fn run_series<R: Rng + ?Sized>(
    x: &mut dyn Agent,
    o: &mut dyn Agent,
    games: u32,
    rng: &mut R,
) -> Result<Tally, ArenaError> {
    let mut tally = Tally::default();
    for _ in 0..games {
        let record = play_session(x, o, GameSession::start(rng))?;
        tally.record(record.status);
    }
    info!(?tally, "Series complete");
    Ok(tally)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Strategy;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_center_first_prefers_center() {
        let mut agent = CenterFirst;
        assert_eq!(agent.choose_move(&Board::new(), Player::X), Ok(4));
        let board: Board = "O___X____".parse().unwrap();
        assert_eq!(agent.choose_move(&board, Player::X), Ok(1));
    }

    #[test]
    fn test_bot_named_after_strategy() {
        for strategy in [Strategy::Minimax, Strategy::DepthFirst] {
            let bot = Bot::seeded(strategy, Some(0));
            assert_eq!(Agent::name(&bot), strategy.to_string());
        }
        assert_eq!(Agent::name(&Bot::seeded(Strategy::DepthFirst, Some(0))), "depth-first");
    }

    #[test]
    fn test_random_agent_stays_legal() {
        let mut agent = RandomAgent::new(StdRng::seed_from_u64(5));
        let board: Board = "XOXOX_O__".parse().unwrap();
        for _ in 0..50 {
            let mv = agent.choose_move(&board, Player::X).unwrap();
            assert!(board.is_empty(mv));
        }
    }

    #[test]
    fn test_tally_counts_games() {
        let mut tally = Tally::default();
        tally.record(GameStatus::Won(Player::X));
        tally.record(GameStatus::Draw);
        tally.record(GameStatus::Draw);
        assert_eq!(
            tally,
            Tally {
                x_wins: 1,
                o_wins: 0,
                draws: 2
            }
        );
        assert_eq!(tally.games(), 3);
    }

    #[test]
    fn test_minimax_self_play_draws() {
        let mut x = Bot::seeded(Strategy::Minimax, None);
        let mut o = Bot::seeded(Strategy::Minimax, None);
        let record = play_game(&mut x, &mut o, Player::X).unwrap();
        assert_eq!(record.status, GameStatus::Draw);
        assert_eq!(record.moves.len(), 9);
    }
}
