//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictactoe_bots::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the highlighted square.
    MoveCursor(Position),
    /// Place a mark on the highlighted square.
    Select,
    /// Place a mark on a square chosen by its digit (1-9).
    SelectIndex(usize),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action given the current cursor.
pub fn action_for(key: KeyCode, cursor: Position) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(move_cursor(cursor, key)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::SelectIndex(digit as usize - 1)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board's edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let next = match key {
        KeyCode::Up if cursor.row() > 0 => index - 3,
        KeyCode::Down if cursor.row() < 2 => index + 3,
        KeyCode::Left if cursor.col() > 0 => index - 1,
        KeyCode::Right if cursor.col() < 2 => index + 1,
        _ => index,
    };
    Position::from_index(next).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomCenter, KeyCode::Down), Position::BottomCenter);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(
            action_for(KeyCode::Char('1'), Position::Center),
            Some(Action::SelectIndex(0))
        );
        assert_eq!(
            action_for(KeyCode::Char('9'), Position::Center),
            Some(Action::SelectIndex(8))
        );
        assert_eq!(action_for(KeyCode::Char('0'), Position::Center), None);
    }
}
