//! Perfect tic-tac-toe - pure game logic and an exact move selector
//!
//! The engine solves the position in front of it: minimax with alpha-beta
//! pruning runs to the end of the game on every call, so its moves are
//! optimal for both sides.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of squares, 3×3 by default
//! - **Rules**: line detection and terminal classification
//! - **Game**: turn tracking and move validation for a live game
//! - **Search**: move generation, ordering, alpha-beta and move selection
//!
//! # Example
//!
//! ```
//! use perfect_tictactoe::{Board, Cell, Engine, Player};
//!
//! let mut board = Board::from_rows(&[['x', 'x', ' '], [' ', 'o', ' '], [' ', ' ', 'o']]).unwrap();
//! let engine = Engine::new();
//! assert_eq!(engine.select_move(&mut board, Player::X), Some(Cell::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
pub mod rules;
pub mod search;
mod types;

pub use board::{Board, BoardError, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
pub use game::{GameState, GameStatus, MoveError};
pub use rules::{Outcome, check_winner, completes_line, evaluate};
pub use search::{
    Engine, Scoring, ScoringError, SearchPath, SearchReport, SearchStats, opening_cell,
    select_move,
};
pub use types::{Cell, ParsePlayerError, Player, Square};
