//! Exhaustive minimax search.

use super::SearchError;
use crate::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Outcome of evaluating a position.
///
/// `mv` is `None` for a position that is already decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Best move for the active player.
    pub mv: Option<usize>,
    /// Best achievable score from the bot's point of view.
    pub score: i32,
}

/// Minimax searcher for one bot/opponent pairing.
///
/// Scores are from the bot's point of view. A decided game scores
/// `empty + 1` for a bot win and `-(empty + 1)` for a loss, so quicker
/// wins and slower losses rank higher. A draw scores zero.
#[derive(Debug, Clone)]
pub struct Minimax {
    bot: Player,
    opponent: Player,
    nodes: u64,
}

impl Minimax {
    /// Creates a searcher maximizing for `bot` against `opponent`.
    pub fn new(bot: Player, opponent: Player) -> Self {
        Self {
            bot,
            opponent,
            nodes: 0,
        }
    }

    /// Positions visited since this searcher was created.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Evaluates `board` with `active` to move.
    ///
    /// Every hypothetical move is undone before returning, so `board` is
    /// left as it was found. Among equally scored moves the lowest index
    /// is kept.
    pub fn evaluate(&mut self, board: &mut Board, active: Player) -> Evaluation {
        self.nodes += 1;

        if let Some(winner) = board.winner() {
            let magnitude = board.available_moves().len() as i32 + 1;
            let score = if winner == self.bot {
                magnitude
            } else {
                -magnitude
            };
            return Evaluation { mv: None, score };
        }

        let moves = board.available_moves();
        if moves.is_empty() {
            return Evaluation { mv: None, score: 0 };
        }

        let maximizing = active == self.bot;
        let next = if maximizing { self.opponent } else { self.bot };
        let mut best = Evaluation {
            mv: None,
            score: if maximizing { i32::MIN } else { i32::MAX },
        };

        for mv in moves {
            let Some(child) = board.with_hypothetical_move(mv, active, |b| self.evaluate(b, next))
            else {
                continue;
            };

            let improves = if maximizing {
                child.score > best.score
            } else {
                child.score < best.score
            };
            if improves {
                best = Evaluation {
                    mv: Some(mv),
                    score: child.score,
                };
            }
        }

        best
    }
}

/// Picks the optimal move for `bot` playing against `human`.
///
/// The bot is the maximizing player at the root. Fails with
/// [`SearchError::TerminalBoard`] when the game is already decided.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn choose_move_minimax(board: &Board, bot: Player, human: Player) -> Result<usize, SearchError> {
    if board.is_terminal() {
        return Err(SearchError::TerminalBoard);
    }

    let mut scratch = board.clone();
    let mut searcher = Minimax::new(bot, human);
    let evaluation = searcher.evaluate(&mut scratch, bot);
    debug_assert_eq!(&scratch, board, "hypothetical moves leaked");

    debug!(
        position = ?evaluation.mv,
        score = evaluation.score,
        nodes = searcher.nodes(),
        "Minimax search complete"
    );

    evaluation.mv.ok_or(SearchError::TerminalBoard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_decided_board_scores_by_remaining_squares() {
        let mut b = board("XXX_OO___");
        let eval = Minimax::new(Player::O, Player::X).evaluate(&mut b, Player::O);
        assert_eq!(eval, Evaluation { mv: None, score: -5 });

        let eval = Minimax::new(Player::X, Player::O).evaluate(&mut b, Player::O);
        assert_eq!(eval, Evaluation { mv: None, score: 5 });
    }

    #[test]
    fn test_full_board_without_winner_scores_zero() {
        let mut b = board("XOXXOOOXX");
        let eval = Minimax::new(Player::O, Player::X).evaluate(&mut b, Player::O);
        assert_eq!(eval, Evaluation { mv: None, score: 0 });
    }

    #[test]
    fn test_prefers_immediate_win() {
        let mut b = board("OO_XX____");
        let eval = Minimax::new(Player::O, Player::X).evaluate(&mut b, Player::O);
        assert_eq!(eval, Evaluation { mv: Some(2), score: 5 });
    }

    #[test]
    fn test_empty_board_is_a_draw_and_keeps_first_move() {
        let mut b = Board::new();
        let mut searcher = Minimax::new(Player::O, Player::X);
        let eval = searcher.evaluate(&mut b, Player::O);
        assert_eq!(eval, Evaluation { mv: Some(0), score: 0 });
        assert_eq!(b, Board::new());
        assert!(searcher.nodes() > 1);
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        assert_eq!(
            choose_move_minimax(&board("XXXOO____"), Player::O, Player::X),
            Err(SearchError::TerminalBoard)
        );
        assert_eq!(
            choose_move_minimax(&board("XOXXOOOXX"), Player::O, Player::X),
            Err(SearchError::TerminalBoard)
        );
    }
}
