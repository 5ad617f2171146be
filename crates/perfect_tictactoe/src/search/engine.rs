//! Top-level move selection.

use super::alphabeta::{Search, SearchStats};
use super::moves::{generate, order};
use super::score::Scoring;
use crate::board::Board;
use crate::rules::evaluate;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which branch of the selector produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchPath {
    /// The position was already won or tied; no move.
    Terminal,
    /// Blank board; the centre was played without searching.
    Opening,
    /// One empty square left; it was played without searching.
    LastCell,
    /// A root candidate completed a line.
    ImmediateWin,
    /// Full alpha-beta search over every root candidate.
    Search,
}

/// Everything one selector call found out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Chosen move, `None` if the position is terminal.
    pub best_move: Option<Cell>,
    /// Root score of the chosen move, when a search ran.
    pub score: Option<i32>,
    /// Branch taken.
    pub path: SearchPath,
    /// Node and cutoff counters.
    pub stats: SearchStats,
}

impl SearchReport {
    fn shortcut(best_move: Option<Cell>, path: SearchPath) -> Self {
        Self {
            best_move,
            score: None,
            path,
            stats: SearchStats::default(),
        }
    }
}

/// Exact tic-tac-toe move selector.
///
/// Holds only its scoring constants; every call works on the board it is
/// given and keeps nothing afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Engine {
    scoring: Scoring,
}

impl Engine {
    /// Creates an engine with the default scoring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with custom scoring constants.
    pub fn with_scoring(scoring: Scoring) -> Self {
        Self { scoring }
    }

    /// Returns the scoring constants.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Picks the best move for `ai`, or `None` if the game is already over.
    ///
    /// The board is borrowed mutably for the search and is identical to its
    /// input when this returns.
    pub fn select_move(&self, board: &mut Board, ai: Player) -> Option<Cell> {
        self.analyze(board, ai).best_move
    }

    /// Picks the best move for `ai` and reports how it was found.
    #[instrument(skip(self, board), fields(size = board.size()))]
    pub fn analyze(&self, board: &mut Board, ai: Player) -> SearchReport {
        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let report = self.select(board, ai);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, snapshot, "search must restore the board");

        debug!(
            best_move = ?report.best_move,
            path = ?report.path,
            score = ?report.score,
            nodes = report.stats.nodes,
            cutoffs = report.stats.cutoffs,
            "Move selected"
        );
        report
    }

    fn select(&self, board: &mut Board, ai: Player) -> SearchReport {
        if evaluate(board, ai).is_terminal() {
            return SearchReport::shortcut(None, SearchPath::Terminal);
        }

        if board.is_blank() {
            return SearchReport::shortcut(Some(opening_cell(board.size())), SearchPath::Opening);
        }

        let mut moves = generate(board);
        if moves.len() == 1 {
            return SearchReport::shortcut(Some(moves[0]), SearchPath::LastCell);
        }
        order(board.size(), &mut moves);

        let mut search = Search::new(board, ai, self.scoring);
        let choice = search.root(&moves);
        SearchReport {
            best_move: Some(choice.cell),
            score: Some(choice.score),
            path: if choice.immediate_win {
                SearchPath::ImmediateWin
            } else {
                SearchPath::Search
            },
            stats: search.stats(),
        }
    }
}

/// Picks the best move for `ai` with default scoring.
///
/// ```
/// use perfect_tictactoe::{Board, Cell, Player, select_move};
///
/// let mut board = Board::from_rows(&[['o', 'o', ' '], [' ', 'x', ' '], [' ', ' ', ' ']]).unwrap();
/// assert_eq!(select_move(&mut board, Player::X), Some(Cell::new(0, 2)));
/// ```
pub fn select_move(board: &mut Board, ai: Player) -> Option<Cell> {
    Engine::new().select_move(board, ai)
}

/// The centre cell; on even boards, the lower of the two central indices.
pub fn opening_cell(size: usize) -> Cell {
    let centre = size.saturating_sub(1) / 2;
    Cell::new(centre, centre)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_cell() {
        assert_eq!(opening_cell(1), Cell::new(0, 0));
        assert_eq!(opening_cell(3), Cell::new(1, 1));
        assert_eq!(opening_cell(4), Cell::new(1, 1));
        assert_eq!(opening_cell(5), Cell::new(2, 2));
    }

    #[test]
    fn test_terminal_board_has_no_move() {
        let mut board: Board = "xxx/oo./...".parse().unwrap();
        let report = Engine::new().analyze(&mut board, Player::O);
        assert_eq!(report.best_move, None);
        assert_eq!(report.path, SearchPath::Terminal);
    }

    #[test]
    fn test_paths() {
        let engine = Engine::new();
        let cases = [
            (".../.../...", SearchPath::Opening),
            ("xox/xoo/ox.", SearchPath::LastCell),
            ("xx./oo./...", SearchPath::ImmediateWin),
            ("x../.../...", SearchPath::Search),
        ];
        for (board, path) in cases {
            let mut board: Board = board.parse().unwrap();
            assert_eq!(engine.analyze(&mut board, Player::X).path, path);
        }
    }

    #[test]
    fn test_search_reports_score_and_stats() {
        let mut board: Board = "x../.../...".parse().unwrap();
        let report = Engine::new().analyze(&mut board, Player::O);
        assert_eq!(report.best_move, Some(Cell::new(1, 1)));
        assert_eq!(report.score, Some(0));
        assert!(report.stats.nodes > 0);
    }
}
