//! Game state container: board, turn tracker and move counter.

use crate::board::{Board, BoardError};
use crate::rules::completes_line;
use crate::types::{Cell, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Errors that can occur when making a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
    /// The cell is not on the board.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Cell),
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Cell),
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    to_move: Player,
    /// Moves made so far.
    move_count: usize,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates a new game on an empty board of the given size. X moves first.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::with_size(size)?,
            to_move: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
        })
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a mutable reference to the board, for handing to the engine.
    ///
    /// The engine restores every square it touches before returning.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the number of moves made.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places the current player's mark at `cell` and hands the turn over.
    ///
    /// The status is recomputed from the lines through `cell` only; a full
    /// board without a completed line is a draw.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the cell is off the board,
    /// or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.to_move, move_count = self.move_count))]
    pub fn make_move(&mut self, cell: Cell) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        match self.board.get(cell) {
            None => return Err(MoveError::OutOfBounds(cell)),
            Some(Square::Occupied(_)) => return Err(MoveError::Occupied(cell)),
            Some(Square::Empty) => {}
        }

        let player = self.to_move;
        self.board.place(cell, player);
        self.to_move = player.opponent();
        self.move_count += 1;

        let size = self.board.size();
        self.status = if completes_line(&self.board, cell) {
            GameStatus::Won(player)
        } else if self.move_count >= size * size {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        };

        debug!(%cell, status = ?self.status, "Move applied");
        Ok(self.status)
    }

    /// Clears the board and resets the turn and move counter.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.move_count = 0;
        self.status = GameStatus::InProgress;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            move_count: 0,
            status: GameStatus::InProgress,
        }
    }
}
