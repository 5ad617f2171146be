//! Exhaustive checks of the selector against a plain minimax reference.

mod common;

use common::{move_value, reachable, solve, winning_cells};
use perfect_tictactoe::{Board, Engine, Player, completes_line};
use std::collections::HashMap;

fn check_positions(start: &Board, to_move: Player) -> usize {
    let engine = Engine::new();
    let mut memo = HashMap::new();
    let positions = reachable(start, to_move);

    for (board, player) in &positions {
        let mut working = board.clone();
        let mv = engine
            .select_move(&mut working, *player)
            .expect("undecided position must yield a move");

        assert_eq!(&working, board, "board not restored for {player}");
        assert!(board.is_empty(mv), "illegal move {mv} on\n{board}");

        let best = solve(&mut board.clone(), *player, &mut memo);
        let chosen = move_value(board, *player, mv, &mut memo);
        assert_eq!(chosen, best, "suboptimal move {mv} for {player} on\n{board}");

        if !winning_cells(board, *player).is_empty() {
            let mut after = board.clone();
            after
                .set(mv, perfect_tictactoe::Square::Occupied(*player))
                .unwrap();
            assert!(
                completes_line(&after, mv),
                "missed immediate win for {player} on\n{board}"
            );
        }
    }

    positions.len()
}

#[test]
fn test_every_reachable_standard_position_is_played_optimally() {
    let checked = check_positions(&Board::new(), Player::X);
    // Undecided positions reachable from the empty 3x3 board.
    assert_eq!(checked, 4520);
}

#[test]
fn test_four_by_four_endgames_are_played_optimally() {
    let start: Board = "xo.o/ox../xxo./o..x".parse().unwrap();
    assert!(check_positions(&start, Player::X) > 1);
}

#[test]
fn test_selector_is_deterministic_over_all_positions() {
    let engine = Engine::new();
    for (board, player) in reachable(&Board::new(), Player::X) {
        let first = engine.select_move(&mut board.clone(), player);
        let second = engine.select_move(&mut board.clone(), player);
        assert_eq!(first, second);
    }
}
