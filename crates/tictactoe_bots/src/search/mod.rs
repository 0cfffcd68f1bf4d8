//! Move search for the computer player.
//!
//! Two strategies live here and share nothing but the board:
//!
//! - [`choose_move_minimax`] explores the full game tree, alternating both
//!   players, and returns an optimal move.
//! - [`choose_move_heuristic`] is a depth-first probe that only ever places
//!   the bot's own mark. It never models the opponent, so it will happily
//!   walk past a line the opponent is about to complete.
//!
//! Both explore by placing hypothetical marks on a scratch copy of the
//! caller's board and undoing each one before trying the next, so the
//! caller's board is never touched.

mod depth_first;
mod minimax;

pub use depth_first::choose_move_heuristic;
pub use minimax::{Evaluation, Minimax, choose_move_minimax};

/// Error returned when a search is asked to move on a finished board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board already has a winner or no empty square.
    #[display("Board is terminal; there is no move to choose")]
    TerminalBoard,
}

impl std::error::Error for SearchError {}
