//! Tic-tac-toe against a computer opponent.
//!
//! This crate holds the game core shared by the terminal front end:
//!
//! # Architecture
//!
//! - **Board**: nine cells, move application, win and tie detection
//! - **Search**: two independent bot strategies
//!   - *minimax*: exhaustive adversarial search, never loses
//!   - *depth-first probe*: a non-adversarial look-ahead that only places the
//!     bot's own mark and falls back to a random move
//! - **Session**: turn orchestration (random starter, strict alternation)
//! - **Arena**: headless games between any two [`Agent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_bots::{Board, Player, choose_move_minimax};
//!
//! let board: Board = "XOXOX___O".parse().unwrap();
//! let mv = choose_move_minimax(&board, Player::O, Player::X).unwrap();
//! assert_eq!(mv, 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod arena;
mod bot;
mod position;
pub mod rules;
pub mod search;
mod session;
mod types;

pub use action::{BoardParseError, MoveError};
pub use arena::{Agent, ArenaError, CenterFirst, GameRecord, RandomAgent, Tally};
pub use bot::{Bot, Strategy};
pub use position::Position;
pub use search::{Evaluation, SearchError, choose_move_heuristic, choose_move_minimax};
pub use session::GameSession;
pub use types::{Board, GameStatus, HypotheticalMove, Player, Square};
