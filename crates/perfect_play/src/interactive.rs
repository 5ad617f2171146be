//! Human-versus-engine session.

use crate::config::PlayConfig;
use crate::console::{Console, Verdict};
use anyhow::{Result, anyhow};
use perfect_tictactoe::{Engine, GameState, GameStatus, Player};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Tally of the games finished in one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SessionSummary {
    /// Games played to the end.
    pub games: usize,
    /// Games the human won.
    pub human_wins: usize,
    /// Games the engine won.
    pub ai_wins: usize,
    /// Drawn games.
    pub ties: usize,
}

impl SessionSummary {
    fn record(&mut self, verdict: Verdict) {
        self.games += 1;
        match verdict {
            Verdict::HumanWins => self.human_wins += 1,
            Verdict::AiWins => self.ai_wins += 1,
            Verdict::Tie => self.ties += 1,
        }
    }
}

/// Plays games against the engine until the human declines a rematch or
/// input ends.
#[instrument(skip_all, fields(board_size = config.board_size()))]
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &Engine,
    config: &PlayConfig,
) -> Result<SessionSummary> {
    let mut game = GameState::new(*config.board_size())?;
    let mut summary = SessionSummary::default();

    loop {
        game.restart();
        let human = match config.human_symbol() {
            Some(symbol) => *symbol,
            None => console.choose_symbol()?,
        };
        info!(%human, "Game started");
        if game.to_move() == human {
            console.show_board(game.board())?;
        }

        let Some(verdict) = play_game(console, engine, &mut game, human)? else {
            console.say("\nEOF received. Exiting game.")?;
            break;
        };
        summary.record(verdict);
        info!(%verdict, moves = game.move_count(), "Game finished");
        console.announce_result(verdict, game.board())?;

        if !console.ask_restart()? {
            break;
        }
    }

    info!(?summary, "Session ended");
    Ok(summary)
}

/// Alternates human and engine moves until the game ends. `None` means the
/// human's input ran out mid-game.
fn play_game<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    engine: &Engine,
    game: &mut GameState,
    human: Player,
) -> Result<Option<Verdict>> {
    let ai = human.opponent();
    loop {
        let status = if game.to_move() == human {
            let Some(cell) = console.read_move(game.board())? else {
                return Ok(None);
            };
            game.make_move(cell)?
        } else {
            let cell = engine
                .select_move(game.board_mut(), ai)
                .ok_or_else(|| anyhow!("engine found no move in a live game"))?;
            let status = game.make_move(cell)?;
            console.announce_ai_move(cell)?;
            if status == GameStatus::InProgress {
                console.show_board(game.board())?;
            }
            status
        };

        match status {
            GameStatus::InProgress => {}
            GameStatus::Won(winner) if winner == human => return Ok(Some(Verdict::HumanWins)),
            GameStatus::Won(_) => return Ok(Some(Verdict::AiWins)),
            GameStatus::Draw => return Ok(Some(Verdict::Tie)),
        }
    }
}
