//! Core domain types for tic-tac-toe.

use super::action::BoardParseError;
use super::position::Position;
use super::rules;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Player in the game, identified by the mark they place.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const CELLS: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Gets the square at a named position.
    pub fn square(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Places `mark` at `index` if that square is empty.
    ///
    /// Returns whether the board changed. An occupied or out-of-range
    /// square leaves the board untouched and yields `false`.
    pub fn apply_move(&mut self, index: usize, mark: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.squares[index] = Square::Occupied(mark);
        true
    }

    /// Indices of all empty squares, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|square| **square != Square::Empty)
            .count()
    }

    /// Returns the player owning a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// A board is terminal once someone has won or no square is left.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Status of a game played on this board.
    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(player) => GameStatus::Won(player),
            None if rules::is_draw(self) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// Places `mark` at `index` until the returned guard is dropped.
    ///
    /// Returns `None` if the square is not empty. The guard dereferences to
    /// the board, so nested hypothetical moves can be stacked on it.
    pub fn hypothetical(&mut self, index: usize, mark: Player) -> Option<HypotheticalMove<'_>> {
        if !self.apply_move(index, mark) {
            return None;
        }
        Some(HypotheticalMove { board: self, index })
    }

    /// Runs `body` with `mark` temporarily placed at `index`.
    ///
    /// The square is cleared again before this returns, including when
    /// `body` panics. Returns `None` without calling `body` if the square
    /// is not empty.
    pub fn with_hypothetical_move<T>(
        &mut self,
        index: usize,
        mark: Player,
        body: impl FnOnce(&mut Board) -> T,
    ) -> Option<T> {
        let mut guard = self.hypothetical(index, mark)?;
        Some(body(&mut *guard))
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number, matching the digit keys.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Parses nine cells in row-major order: `X`, `O`, and `_`, `.` or `-` for
/// an empty square.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().collect();
        if cells.len() != Self::CELLS {
            return Err(BoardParseError::WrongLength(cells.len()));
        }

        let mut squares = [Square::Empty; 9];
        for (index, cell) in cells.into_iter().enumerate() {
            squares[index] = match cell {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '_' | '.' | '-' => Square::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self { squares })
    }
}

/// A mark placed for exploration only.
///
/// Dropping the guard clears the square again, so sibling branches of a
/// search never observe each other's moves.
#[derive(Debug)]
pub struct HypotheticalMove<'a> {
    board: &'a mut Board,
    index: usize,
}

impl Deref for HypotheticalMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for HypotheticalMove<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        self.board.squares[self.index] = Square::Empty;
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hypothetical_move_restores_square() {
        let mut board = Board::new();
        let seen = board.with_hypothetical_move(4, Player::X, |b| b.get(4));
        assert_eq!(seen, Some(Some(Square::Occupied(Player::X))));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_hypothetical_move_rejects_occupied_square() {
        let mut board = Board::new();
        assert!(board.apply_move(0, Player::O));
        let ran = board.with_hypothetical_move(0, Player::X, |_| ());
        assert_eq!(ran, None);
        assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
    }

    #[test]
    fn test_nested_hypothetical_moves_unwind() {
        let mut board = Board::new();
        {
            let mut outer = board.hypothetical(0, Player::X).unwrap();
            {
                let inner = outer.hypothetical(1, Player::O).unwrap();
                assert_eq!(inner.occupied_count(), 2);
            }
            assert_eq!(outer.occupied_count(), 1);
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_hypothetical_move_restored_on_panic() {
        let mut board = Board::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _: Option<()> =
                board.with_hypothetical_move(8, Player::O, |_| panic!("search aborted"));
        }));
        assert!(result.is_err());
        assert!(board.is_empty(8));
    }

    #[test]
    fn test_status_follows_rules() {
        assert_eq!(Board::new().status(), GameStatus::InProgress);
        let tie: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(tie.status(), GameStatus::Draw);
        let won: Board = "XOXOXOXOX".parse().unwrap();
        assert_eq!(won.status(), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_parse_accepts_each_empty_marker() {
        let board: Board = "X_.-O____".parse().unwrap();
        assert_eq!(board.occupied_count(), 2);
        assert_eq!("X_. O____".parse::<Board>(), Err(BoardParseError::InvalidCell(' ')));
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board: Board = "X___O___O".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(BoardParseError::WrongLength(2))
        );
        assert_eq!(
            "XOZ______".parse::<Board>(),
            Err(BoardParseError::InvalidCell('Z'))
        );
    }

    #[test]
    fn test_player_parses_case_insensitively() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert_eq!(Player::X.to_string(), "X");
    }
}
