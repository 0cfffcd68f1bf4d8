//! Tests for headless series between agents.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_bots::arena::{play_game, run_series};
use tictactoe_bots::{Bot, GameStatus, Player, RandomAgent, Strategy};

#[test]
fn test_minimax_never_loses_to_random() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut random = RandomAgent::new(StdRng::seed_from_u64(7));
    let mut bot = Bot::seeded(Strategy::Minimax, Some(7));

    let tally = run_series(&mut random, &mut bot, 40, &mut rng).unwrap();
    assert_eq!(tally.games(), 40);
    assert_eq!(tally.x_wins, 0);
}

#[test]
fn test_minimax_never_loses_to_depth_first() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut probe = Bot::seeded(Strategy::DepthFirst, Some(5));
    let mut minimax = Bot::seeded(Strategy::Minimax, Some(5));

    let tally = run_series(&mut minimax, &mut probe, 20, &mut rng).unwrap();
    assert_eq!(tally.o_wins, 0);
}

#[test]
fn test_depth_first_loses_to_minimax_when_moving_second() {
    // The probe never blocks, so minimax converts its opening.
    let mut minimax = Bot::seeded(Strategy::Minimax, Some(0));
    let mut probe = Bot::seeded(Strategy::DepthFirst, Some(0));
    let record = play_game(&mut minimax, &mut probe, Player::X).unwrap();
    assert_eq!(record.status, GameStatus::Won(Player::X));
}

#[test]
fn test_record_serializes() {
    let mut x = Bot::seeded(Strategy::Minimax, Some(1));
    let mut o = Bot::seeded(Strategy::Minimax, Some(1));
    let record = play_game(&mut x, &mut o, Player::O).unwrap();
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["starter"], "O");
    assert_eq!(json["status"], "Draw");
}
