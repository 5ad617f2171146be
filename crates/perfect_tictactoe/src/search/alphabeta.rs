//! Minimax with alpha-beta pruning over a borrowed board.
//!
//! The maximizing and minimizing plies are separate, mutually recursive
//! procedures. Each places a mark, recurses, and removes the mark again, so
//! the board is back in its original state whenever a procedure returns.
//!
//! Two fast paths replace the recursive call for a child position:
//! - the placed mark completes a line, so the child is a depth-adjusted win
//!   or loss without a full evaluator pass;
//! - the placed mark filled the last empty square without completing a line,
//!   so the child is a tie.

use super::moves::{generate_into, order};
use super::score::Scoring;
use crate::board::Board;
use crate::rules::{Outcome, completes_line, evaluate};
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};

/// Counters for one top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Positions visited by the recursive procedures.
    pub nodes: u64,
    /// Times a ply stopped early because `beta <= alpha`.
    pub cutoffs: u64,
}

/// Best root move found by [`Search::root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RootChoice {
    pub(crate) cell: Cell,
    pub(crate) score: i32,
    pub(crate) immediate_win: bool,
}

/// Recursive search state for one call.
pub(crate) struct Search<'a> {
    board: &'a mut Board,
    ai: Player,
    scoring: Scoring,
    stats: SearchStats,
    /// One move buffer per depth, reused across siblings.
    buffers: Vec<Vec<Cell>>,
}

impl<'a> Search<'a> {
    pub(crate) fn new(board: &'a mut Board, ai: Player, scoring: Scoring) -> Self {
        let cells = board.size() * board.size();
        Self {
            board,
            ai,
            scoring,
            stats: SearchStats::default(),
            buffers: (0..=cells).map(|_| Vec::with_capacity(cells)).collect(),
        }
    }

    pub(crate) fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Searches every candidate at the root, in the given order.
    ///
    /// Returns at once, with the board restored, if a candidate completes a
    /// line. Otherwise keeps the first candidate with the strictly highest
    /// score. `moves` must be non-empty.
    pub(crate) fn root(&mut self, moves: &[Cell]) -> RootChoice {
        let mut alpha = -self.scoring.infinity;
        let beta = self.scoring.infinity;
        let mut best = RootChoice {
            cell: moves[0],
            score: -self.scoring.infinity,
            immediate_win: false,
        };

        for &cell in moves {
            self.board.place(cell, self.ai);
            if completes_line(&*self.board, cell) {
                self.board.unplace(cell);
                return RootChoice {
                    cell,
                    score: self.scoring.win_at(1),
                    immediate_win: true,
                };
            }
            let score = self.minimize(1, alpha, beta);
            self.board.unplace(cell);

            if score > best.score {
                best.cell = cell;
                best.score = score;
                alpha = score;
            }
        }

        best
    }

    /// The AI's ply.
    pub(crate) fn maximize(&mut self, depth: u32, mut alpha: i32, beta: i32) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = self.terminal_score(depth) {
            return score;
        }

        let moves = self.take_moves(depth);
        let fills_board = moves.len() == 1;
        let mut best = -self.scoring.infinity;

        for &cell in &moves {
            self.board.place(cell, self.ai);
            let score = if completes_line(&*self.board, cell) {
                self.scoring.win_at(depth + 1)
            } else if fills_board {
                self.scoring.tie
            } else {
                self.minimize(depth + 1, alpha, beta)
            };
            self.board.unplace(cell);

            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.give_back(depth, moves);
        best
    }

    /// The opponent's ply.
    pub(crate) fn minimize(&mut self, depth: u32, alpha: i32, mut beta: i32) -> i32 {
        self.stats.nodes += 1;
        if let Some(score) = self.terminal_score(depth) {
            return score;
        }

        let opponent = self.ai.opponent();
        let moves = self.take_moves(depth);
        let fills_board = moves.len() == 1;
        let mut best = self.scoring.infinity;

        for &cell in &moves {
            self.board.place(cell, opponent);
            let score = if completes_line(&*self.board, cell) {
                self.scoring.loss_at(depth + 1)
            } else if fills_board {
                self.scoring.tie
            } else {
                self.maximize(depth + 1, alpha, beta)
            };
            self.board.unplace(cell);

            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.give_back(depth, moves);
        best
    }

    /// Depth-adjusted score if the position is already decided.
    fn terminal_score(&self, depth: u32) -> Option<i32> {
        match evaluate(&*self.board, self.ai) {
            Outcome::Continue => None,
            Outcome::Tie => Some(self.scoring.tie),
            Outcome::Win => Some(self.scoring.win_at(depth)),
            Outcome::Loss => Some(self.scoring.loss_at(depth)),
        }
    }

    /// Ordered candidates for this depth, in the depth's reusable buffer.
    fn take_moves(&mut self, depth: u32) -> Vec<Cell> {
        let mut moves = std::mem::take(&mut self.buffers[depth as usize]);
        generate_into(&*self.board, &mut moves);
        order(self.board.size(), &mut moves);
        moves
    }

    fn give_back(&mut self, depth: u32, moves: Vec<Cell>) {
        self.buffers[depth as usize] = moves;
    }
}
