//! Terminal classification relative to one player.

use super::win::check_winner;
use crate::board::Board;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// State of a board as seen by a designated player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    Continue,
    /// No line is complete and the board is full.
    Tie,
    /// The designated player holds a complete line.
    Win,
    /// The designated player's opponent holds a complete line.
    Loss,
}

impl Outcome {
    /// Returns true for every outcome except [`Outcome::Continue`].
    pub fn is_terminal(self) -> bool {
        self != Outcome::Continue
    }
}

/// Classifies the board from `perspective`'s point of view.
///
/// A complete line takes precedence over a full board.
pub fn evaluate(board: &Board, perspective: Player) -> Outcome {
    match check_winner(board) {
        Some(winner) if winner == perspective => Outcome::Win,
        Some(_) => Outcome::Loss,
        None if board.is_full() => Outcome::Tie,
        None => Outcome::Continue,
    }
}
