//! Win detection logic for tic-tac-toe.
//!
//! A line is a full row, a full column, or one of the two main diagonals.
//! It is complete when all of its squares hold the same player.

use crate::board::Board;
use crate::types::{Cell, Player, Square};

/// Checks if there is a winner on the board.
///
/// Scans rows, then columns, then the main diagonal, then the anti-diagonal,
/// and returns the holder of the first complete line found.
pub fn check_winner(board: &Board) -> Option<Player> {
    let n = board.size();
    let squares = board.squares();

    for row in 0..n {
        if let Some(player) = line_owner(squares, (0..n).map(|col| row * n + col)) {
            return Some(player);
        }
    }

    for col in 0..n {
        if let Some(player) = line_owner(squares, (0..n).map(|row| row * n + col)) {
            return Some(player);
        }
    }

    if let Some(player) = line_owner(squares, (0..n).map(|i| i * n + i)) {
        return Some(player);
    }

    line_owner(squares, (0..n).map(|i| i * n + (n - 1 - i)))
}

/// Checks whether the mark at `cell` completes a line through that cell.
///
/// Only the cell's row, its column, and whichever diagonals pass through it
/// are inspected. An empty or off-board cell never completes a line.
pub fn completes_line(board: &Board, cell: Cell) -> bool {
    let player = match board.get(cell) {
        Some(Square::Occupied(player)) => player,
        _ => return false,
    };
    let n = board.size();
    let squares = board.squares();

    held(squares, player, (0..n).map(|col| cell.row * n + col))
        || held(squares, player, (0..n).map(|row| row * n + cell.col))
        || (cell.row == cell.col && held(squares, player, (0..n).map(|i| i * n + i)))
        || (cell.row + cell.col == n - 1
            && held(squares, player, (0..n).map(|i| i * n + (n - 1 - i))))
}

/// Returns true if `player` holds every square of the line.
fn held(squares: &[Square], player: Player, mut line: impl Iterator<Item = usize>) -> bool {
    line.all(|i| squares[i] == Square::Occupied(player))
}

/// Returns the player holding every square of the line, if any.
fn line_owner(squares: &[Square], mut line: impl Iterator<Item = usize>) -> Option<Player> {
    let first = squares[line.next()?].player()?;
    line.all(|i| squares[i] == Square::Occupied(first))
        .then_some(first)
}
