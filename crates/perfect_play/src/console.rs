//! Line-based terminal I/O for a human player.
//!
//! Every prompt reads one line. End of input is reported to the caller as
//! `None` (or the documented default) rather than as an error, so a closed
//! stdin ends the session cleanly.

use derive_more::Display;
use perfect_tictactoe::{Board, Cell, Player};
use std::io::{self, BufRead, Write};
use tracing::{debug, instrument};

/// How a finished game went, from the human's side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    /// The human completed a line.
    #[display("Player wins!")]
    HumanWins,
    /// The engine completed a line.
    #[display("AI wins!")]
    AiWins,
    /// The board filled up without a line.
    #[display("It's a tie!")]
    Tie,
}

/// Which coordinate a prompt is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Axis {
    #[display("column")]
    Column,
    #[display("row")]
    Row,
}

impl Axis {
    fn prompt(self) -> &'static str {
        match self {
            Axis::Column => "Input column: ",
            Axis::Row => "Input row: ",
        }
    }

    fn capitalized(self) -> &'static str {
        match self {
            Axis::Column => "Column",
            Axis::Row => "Row",
        }
    }
}

/// Terminal front end over any line reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wraps an input and an output stream.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console and returns the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks which symbol the human plays. Defaults to `x` at end of input.
    #[instrument(skip(self))]
    pub fn choose_symbol(&mut self) -> io::Result<Player> {
        loop {
            self.prompt("Choose your symbol (x/o): ")?;
            let Some(line) = self.read_line()? else {
                self.say("\nEOF received. Defaulting to x.")?;
                return Ok(Player::X);
            };
            let Some(first) = line.trim().chars().next() else {
                continue;
            };
            match Player::from_symbol(first) {
                Some(player) => {
                    debug!(%player, "Human chose symbol");
                    return Ok(player);
                }
                None => self.say("Please enter x or o.")?,
            }
        }
    }

    /// Reads a legal move for `board`, or `None` at end of input.
    ///
    /// Coordinates are entered 1-based, column first. An occupied cell
    /// restarts the prompt from the column.
    #[instrument(skip(self, board))]
    pub fn read_move(&mut self, board: &Board) -> io::Result<Option<Cell>> {
        let size = board.size();
        loop {
            let Some(col) = self.read_coordinate(Axis::Column, size)? else {
                return Ok(None);
            };
            let Some(row) = self.read_coordinate(Axis::Row, size)? else {
                return Ok(None);
            };
            let cell = Cell::new(row, col);
            if board.is_empty(cell) {
                debug!(%cell, "Human move read");
                return Ok(Some(cell));
            }
            self.say("Cell already occupied. Choose another.\n")?;
        }
    }

    /// Asks whether to play another game. End of input means no.
    #[instrument(skip(self))]
    pub fn ask_restart(&mut self) -> io::Result<bool> {
        loop {
            self.prompt("Play again? (y/n): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            match line.trim().chars().next() {
                None => continue,
                Some('y' | 'Y') => return Ok(true),
                Some('n' | 'N') => return Ok(false),
                Some(_) => self.say("Please enter y or n.")?,
            }
        }
    }

    /// Draws the board between blank lines.
    pub fn show_board(&mut self, board: &Board) -> io::Result<()> {
        write!(self.output, "\n{}\n", board.render())?;
        self.output.flush()
    }

    /// Reports the engine's move, 1-based and column first.
    pub fn announce_ai_move(&mut self, cell: Cell) -> io::Result<()> {
        self.say(&format!("AI plays {}", cell))
    }

    /// Reports the end of a game and draws the final board.
    pub fn announce_result(&mut self, verdict: Verdict, board: &Board) -> io::Result<()> {
        self.say(&verdict.to_string())?;
        self.show_board(board)?;
        self.say("")
    }

    /// Writes one line of text.
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    /// Reads one line, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        match self.input.read_line(&mut line)? {
            0 => Ok(None),
            _ => Ok(Some(line)),
        }
    }

    /// Prompts until a number in `1..=size` arrives; returns it 0-based.
    fn read_coordinate(&mut self, axis: Axis, size: usize) -> io::Result<Option<usize>> {
        loop {
            self.prompt(axis.prompt())?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            let Some(token) = line.split_whitespace().next() else {
                continue;
            };
            match token.parse::<i64>() {
                Ok(value) if (1..=size as i64).contains(&value) => {
                    return Ok(Some(value as usize - 1));
                }
                Ok(value) => {
                    debug!(%axis, value, "Coordinate out of range");
                    self.say(&format!(
                        "{} out of range (1-{}).",
                        axis.capitalized(),
                        size
                    ))?;
                }
                Err(_) => {
                    self.say(&format!(
                        "Invalid {} input. Enter a number 1-{}.",
                        axis, size
                    ))?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::HumanWins.to_string(), "Player wins!");
        assert_eq!(Verdict::AiWins.to_string(), "AI wins!");
        assert_eq!(Verdict::Tie.to_string(), "It's a tie!");
    }

    #[test]
    fn test_coordinate_accepts_leading_number() {
        let mut c = console("  2 trailing\n");
        assert_eq!(c.read_coordinate(Axis::Row, 3).unwrap(), Some(1));
    }

    #[test]
    fn test_coordinate_skips_blank_lines() {
        let mut c = console("\n\n3\n");
        assert_eq!(c.read_coordinate(Axis::Column, 3).unwrap(), Some(2));
        assert_eq!(output(c), "Input column: Input column: Input column: ");
    }

    #[test]
    fn test_board_is_framed_by_blank_lines() {
        let mut c = console("");
        c.show_board(&Board::with_size(2).unwrap()).unwrap();
        assert_eq!(output(c), "\n   1  2 \n 1[ ][ ]\n 2[ ][ ]\n\n");
    }

    #[test]
    fn test_coordinate_eof() {
        let mut c = console("");
        assert_eq!(c.read_coordinate(Axis::Column, 3).unwrap(), None);
    }
}
