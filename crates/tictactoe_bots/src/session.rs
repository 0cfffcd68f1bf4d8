//! Turn orchestration for a single game.

use crate::{Board, GameStatus, MoveError, Player};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One game in progress: the board, whose turn it is, and what was played.
///
/// The session enforces strict alternation and re-checks the result after
/// every move. It knows nothing about who is human; front ends decide which
/// mark a strategy plays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    starter: Player,
    to_move: Player,
    status: GameStatus,
    history: Vec<usize>,
}

impl GameSession {
    /// Creates a session where `starter` moves first.
    pub fn new(starter: Player) -> Self {
        Self {
            board: Board::new(),
            starter,
            to_move: starter,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Creates a session with the starting player drawn uniformly from `rng`.
    #[instrument(skip(rng))]
    pub fn start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let starter = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        info!(%starter, "Starting new game");
        Self::new(starter)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player who moved first.
    pub fn starter(&self) -> Player {
        self.starter
    }

    /// Player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Indices played so far, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Places `mark` at `index` and hands the turn to the other player.
    ///
    /// # Errors
    ///
    /// Rejects the move, leaving the session untouched, if the game is over,
    /// it is not `mark`'s turn, or the square is out of range or occupied.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, mark: Player, index: usize) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if mark != self.to_move {
            return Err(MoveError::WrongPlayer(mark));
        }
        if index >= Board::CELLS {
            return Err(MoveError::OutOfBounds(index));
        }
        if !self.board.apply_move(index, mark) {
            return Err(MoveError::SquareOccupied(index));
        }

        self.history.push(index);
        self.to_move = mark.opponent();
        self.status = self.board.status();
        debug!(status = ?self.status, plies = self.history.len(), "Move applied");

        if let GameStatus::Won(winner) = self.status {
            info!(%winner, "Game won");
        } else if self.status == GameStatus::Draw {
            info!("Game drawn");
        }

        Ok(self.status)
    }

    /// Clears the board and draws a new starting player.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::start(rng);
    }
}
