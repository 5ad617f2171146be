//! Search module for the tic-tac-toe engine.
//!
//! Contains:
//! - Move generation and static move ordering
//! - Score constants with depth adjustment
//! - Minimax with alpha-beta pruning
//! - The top-level move selector

pub mod alphabeta;
pub mod engine;
pub mod moves;
pub mod score;

pub use alphabeta::SearchStats;
pub use engine::{Engine, SearchPath, SearchReport, opening_cell, select_move};
pub use score::{Scoring, ScoringError};
