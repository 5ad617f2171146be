//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules, shared by the game container and the
//! search engine.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{check_winner, completes_line};
