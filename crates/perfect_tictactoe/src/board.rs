//! Square N×N tic-tac-toe board.

use crate::types::{Cell, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the standard board.
pub const DEFAULT_BOARD_SIZE: usize = 3;

/// Largest supported side length. Input is 1-based single digits up to this.
pub const MAX_BOARD_SIZE: usize = 9;

/// Errors from constructing or addressing a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length outside `1..=MAX_BOARD_SIZE`.
    #[display("Board size {} out of range (1-{})", _0, MAX_BOARD_SIZE)]
    InvalidSize(#[error(not(source))] usize),
    /// A row does not have as many cells as there are rows.
    #[display("Row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        /// Offending row, 0-based.
        row: usize,
        /// Cells found in the row.
        len: usize,
        /// Cells required.
        expected: usize,
    },
    /// A character that is neither a player nor an empty marker.
    #[display("Unknown board symbol {:?}", _0)]
    UnknownSymbol(#[error(not(source))] char),
    /// A coordinate outside the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Cell),
}

/// N×N tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Side length.
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty 3×3 board.
    pub fn new() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            squares: vec![Square::Empty; DEFAULT_BOARD_SIZE * DEFAULT_BOARD_SIZE],
        }
    }

    /// Creates an empty board with the given side length.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            squares: vec![Square::Empty; size * size],
        })
    }

    /// Builds a board from rows of symbols (`x`, `o`, and space for empty).
    ///
    /// ```
    /// use perfect_tictactoe::{Board, Cell, Player, Square};
    ///
    /// let board = Board::from_rows(&[['x', 'x', ' '], [' ', 'o', ' '], [' ', ' ', 'o']]).unwrap();
    /// assert_eq!(board.get(Cell::new(1, 1)), Some(Square::Occupied(Player::O)));
    /// ```
    pub fn from_rows<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, BoardError> {
        let mut board = Self::with_size(rows.len())?;
        for (row, symbols) in rows.iter().enumerate() {
            let symbols = symbols.as_ref();
            if symbols.len() != board.size {
                return Err(BoardError::RaggedRow {
                    row,
                    len: symbols.len(),
                    expected: board.size,
                });
            }
            for (col, &c) in symbols.iter().enumerate() {
                let square = Square::from_symbol(c).ok_or(BoardError::UnknownSymbol(c))?;
                board.squares[row * board.size + col] = square;
            }
        }
        Ok(board)
    }

    /// Returns the side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the cell lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Option<Square> {
        if !self.contains(cell) {
            return None;
        }
        self.squares.get(self.index(cell)).copied()
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, cell: Cell, square: Square) -> Result<(), BoardError> {
        if !self.contains(cell) {
            return Err(BoardError::OutOfBounds(cell));
        }
        let index = self.index(cell);
        self.squares[index] = square;
        Ok(())
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.get(cell), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let size = self.size;
        (0..size * size).map(move |i| Cell::new(i / size, i % size))
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Checks if no square is occupied.
    pub fn is_blank(&self) -> bool {
        self.squares.iter().all(|s| *s == Square::Empty)
    }

    /// Clears every square.
    pub fn clear(&mut self) {
        self.squares.fill(Square::Empty);
    }

    /// Formats the board the way the terminal shows it.
    ///
    /// A header of 1-based column numbers, then one line per row:
    ///
    /// ```text
    ///    1  2  3
    ///  1[x][ ][ ]
    ///  2[ ][o][ ]
    ///  3[ ][ ][ ]
    /// ```
    pub fn render(&self) -> String {
        let mut result = String::from("  ");
        for col in 0..self.size {
            result.push_str(&format!(" {} ", col + 1));
        }
        result.push('\n');
        for row in 0..self.size {
            result.push_str(&format!(" {}", row + 1));
            for col in 0..self.size {
                result.push('[');
                result.push(self.squares[row * self.size + col].symbol());
                result.push(']');
            }
            result.push('\n');
        }
        result
    }

    pub(crate) fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    /// Places a mark without bounds or occupancy checks. Search use only.
    pub(crate) fn place(&mut self, cell: Cell, player: Player) {
        let index = self.index(cell);
        self.squares[index] = Square::Occupied(player);
    }

    /// Empties a square without checks. Search use only.
    pub(crate) fn unplace(&mut self, cell: Cell) {
        let index = self.index(cell);
        self.squares[index] = Square::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parses rows separated by `/`, e.g. `"xx./.o./..o"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s.split('/').map(|row| row.chars().collect()).collect();
        Self::from_rows(&rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
