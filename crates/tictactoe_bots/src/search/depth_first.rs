//! Depth-first probe for a winning sequence of the bot's own marks.
//!
//! The probe keeps placing the bot's mark and never the opponent's. It
//! therefore finds a "winning line" whenever one is still open, ignores
//! threats from the opponent, and only falls back to a random move once
//! every line already holds an opponent mark.

use super::SearchError;
use crate::{Board, Player};
use rand::Rng;
use tracing::{debug, instrument};

struct Probe {
    bot: Player,
    nodes: u64,
}

impl Probe {
    /// Whether some sequence of further bot-only placements wins on `board`.
    fn reaches_win(&mut self, board: &mut Board) -> bool {
        self.nodes += 1;

        match board.winner() {
            Some(mark) if mark == self.bot => return true,
            Some(_) => return false,
            None => {}
        }

        for mv in board.available_moves() {
            let found = board
                .with_hypothetical_move(mv, self.bot, |b| self.reaches_win(b))
                .unwrap_or(false);
            if found {
                return true;
            }
        }

        false
    }
}

/// Picks a move for `bot` with the depth-first probe.
///
/// Candidates are tried in ascending order and the first one from which the
/// probe reaches a bot win is returned. If none does, a legal move is drawn
/// uniformly from `rng`. Fails with [`SearchError::TerminalBoard`] when the
/// game is already decided; the board is never modified.
#[instrument(skip(board, rng), fields(occupied = board.occupied_count()))]
pub fn choose_move_heuristic<R: Rng + ?Sized>(
    board: &Board,
    bot: Player,
    rng: &mut R,
) -> Result<usize, SearchError> {
    if board.is_terminal() {
        return Err(SearchError::TerminalBoard);
    }

    let mut scratch = board.clone();
    let mut probe = Probe { bot, nodes: 0 };
    let moves = scratch.available_moves();

    for &mv in &moves {
        let found = scratch
            .with_hypothetical_move(mv, bot, |b| probe.reaches_win(b))
            .unwrap_or(false);
        if found {
            debug!(position = mv, nodes = probe.nodes, "Probe found a winning sequence");
            return Ok(mv);
        }
    }
    debug_assert_eq!(&scratch, board, "hypothetical moves leaked");

    let mv = moves[rng.random_range(0..moves.len())];
    debug!(position = mv, nodes = probe.nodes, "No winning sequence, playing a random move");
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_takes_first_candidate_with_open_line() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board("X________");
        assert_eq!(choose_move_heuristic(&b, Player::O, &mut rng), Ok(1));
    }

    #[test]
    fn test_probe_succeeds_on_already_won_board() {
        let mut probe = Probe {
            bot: Player::O,
            nodes: 0,
        };
        assert!(probe.reaches_win(&mut board("OOO_XX_X_")));
        assert!(!probe.reaches_win(&mut board("XXX_OO_O_")));
    }

    #[test]
    fn test_falls_back_to_random_when_every_line_is_blocked() {
        // X sits on every line without owning one; O can no longer win.
        let b = board("XOOOXX_X_");
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mv = choose_move_heuristic(&b, Player::O, &mut rng).unwrap();
            assert!(mv == 6 || mv == 8, "unexpected move {mv}");
        }
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let b = board("XXXOO____");
        assert_eq!(
            choose_move_heuristic(&b, Player::O, &mut rng),
            Err(SearchError::TerminalBoard)
        );
        assert_eq!(b, board("XXXOO____"));
    }
}
