//! Tests for the depth-first probe strategy.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_bots::{Board, Player, SearchError, choose_move_heuristic, choose_move_minimax};

fn board(cells: &str) -> Board {
    cells.parse().expect("valid board")
}

#[test]
fn test_returns_an_empty_square() {
    let board = board("X________");
    let mut rng = StdRng::seed_from_u64(1);
    let mv = choose_move_heuristic(&board, Player::O, &mut rng).unwrap();
    assert!(board.is_empty(mv));
    assert_eq!(mv, 1);
}

#[test]
fn test_empty_board_takes_first_square() {
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move_heuristic(&Board::new(), Player::X, &mut rng), Ok(0));
}

#[test]
fn test_does_not_block_opponent() {
    // X completes the middle row at 5 next turn; the probe ignores it.
    let board = board("O__XX____");
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(choose_move_heuristic(&board, Player::O, &mut rng), Ok(1));
    assert_eq!(choose_move_minimax(&board, Player::O, Player::X), Ok(5));
}

#[test]
fn test_fallback_is_reproducible_with_seed() {
    let board = board("XOOOXX_X_");
    let first: Vec<usize> = {
        let mut rng = StdRng::seed_from_u64(99);
        (0..16)
            .map(|_| choose_move_heuristic(&board, Player::O, &mut rng).unwrap())
            .collect()
    };
    let second: Vec<usize> = {
        let mut rng = StdRng::seed_from_u64(99);
        (0..16)
            .map(|_| choose_move_heuristic(&board, Player::O, &mut rng).unwrap())
            .collect()
    };
    assert_eq!(first, second);
    assert!(first.iter().all(|mv| *mv == 6 || *mv == 8));
}

#[test]
fn test_full_board_is_rejected_without_corruption() {
    let full = board("XOXXOOOXX");
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        choose_move_heuristic(&full, Player::O, &mut rng),
        Err(SearchError::TerminalBoard)
    );
    assert_eq!(full, board("XOXXOOOXX"));
}

#[test]
fn test_input_board_unchanged() {
    let original = board("XO__X____");
    let copy = original.clone();
    let mut rng = StdRng::seed_from_u64(4);
    choose_move_heuristic(&original, Player::O, &mut rng).unwrap();
    assert_eq!(original, copy);
}
