//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player X (goes first).
    #[display("x")]
    #[serde(alias = "X")]
    X,
    /// Player O (goes second).
    #[display("o")]
    #[serde(alias = "O")]
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

    /// Returns the board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }

    /// Parses a player from its symbol, ignoring case.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Player::X),
            'o' | 'O' => Some(Player::O),
            _ => None,
        }
    }
}

/// Error returned when a string does not name a player.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown player symbol: {:?} (expected x or o)", input)]
pub struct ParsePlayerError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next().and_then(Player::from_symbol), chars.next()) {
            (Some(player), None) => Ok(player),
            _ => Err(ParsePlayerError {
                input: s.to_string(),
            }),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the character drawn for this square.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Parses a square from a character. Space, `.` and `-` are empty.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            ' ' | '.' | '-' => Some(Square::Empty),
            other => Player::from_symbol(other).map(Square::Occupied),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A cell coordinate, 0-based.
///
/// Displayed 1-based as `(column, row)`, the order the terminal asks for input.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_new::new,
)]
pub struct Cell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col + 1, self.row + 1)
    }
}
