//! Shared helpers for engine integration tests.

#![allow(dead_code)]

use perfect_tictactoe::{Board, Cell, Player, Square, check_winner, completes_line};
use std::collections::{HashMap, HashSet};

/// Exact game value for the player to move: 1 win, 0 draw, -1 loss.
pub fn solve(board: &mut Board, to_move: Player, memo: &mut HashMap<(Board, Player), i8>) -> i8 {
    if let Some(winner) = check_winner(board) {
        return if winner == to_move { 1 } else { -1 };
    }
    if board.is_full() {
        return 0;
    }
    if let Some(&value) = memo.get(&(board.clone(), to_move)) {
        return value;
    }

    let empty: Vec<Cell> = board.cells().filter(|&c| board.is_empty(c)).collect();
    let mut best = -1;
    for cell in empty {
        board.set(cell, Square::Occupied(to_move)).unwrap();
        let value = -solve(board, to_move.opponent(), memo);
        board.set(cell, Square::Empty).unwrap();
        best = best.max(value);
        if best == 1 {
            break;
        }
    }

    memo.insert((board.clone(), to_move), best);
    best
}

/// Value for `player` of playing `cell` on `board`.
pub fn move_value(
    board: &Board,
    player: Player,
    cell: Cell,
    memo: &mut HashMap<(Board, Player), i8>,
) -> i8 {
    let mut child = board.clone();
    child.set(cell, Square::Occupied(player)).unwrap();
    -solve(&mut child, player.opponent(), memo)
}

/// Cells where `player` would complete a line immediately.
pub fn winning_cells(board: &Board, player: Player) -> Vec<Cell> {
    board
        .cells()
        .filter(|&cell| board.is_empty(cell))
        .filter(|&cell| {
            let mut child = board.clone();
            child.set(cell, Square::Occupied(player)).unwrap();
            completes_line(&child, cell)
        })
        .collect()
}

/// Every undecided position reachable from `start` by alternating play.
pub fn reachable(start: &Board, to_move: Player) -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut stack = vec![(start.clone(), to_move)];
    let mut out = Vec::new();
    while let Some((board, player)) = stack.pop() {
        if check_winner(&board).is_some() || board.is_full() {
            continue;
        }
        if !seen.insert((board.clone(), player)) {
            continue;
        }
        for cell in board.cells().filter(|&c| board.is_empty(c)) {
            let mut child = board.clone();
            child.set(cell, Square::Occupied(player)).unwrap();
            stack.push((child, player.opponent()));
        }
        out.push((board, player));
    }
    out
}
