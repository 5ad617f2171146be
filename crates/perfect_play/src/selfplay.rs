//! Engine-versus-engine benchmark.

use perfect_tictactoe::{BoardError, Engine, GameState, GameStatus, Player};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Results of a self-play run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelfPlayReport {
    /// Games played.
    pub games: usize,
    /// Games won by the engine playing X.
    pub x_wins: usize,
    /// Games won by the engine playing O.
    pub o_wins: usize,
    /// Drawn games.
    pub ties: usize,
    /// Wall-clock time for all games, in seconds.
    pub elapsed_secs: f64,
}

impl SelfPlayReport {
    /// Games per second, or zero if no time was measured.
    pub fn throughput(&self) -> f64 {
        if self.elapsed_secs > 0.0 {
            self.games as f64 / self.elapsed_secs
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for SelfPlayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Self-play finished: {} games. AI1Wins={} AI2Wins={} Ties={}",
            self.games, self.x_wins, self.o_wins, self.ties
        )?;
        write!(
            f,
            "Elapsed: {:.3} s, Throughput: {:.1} games/s",
            self.elapsed_secs,
            self.throughput()
        )
    }
}

/// Plays `games` complete games with the engine on both sides.
///
/// Each game starts from an empty `size`×`size` board with X to move.
#[instrument(skip(engine))]
pub fn run(engine: &Engine, size: usize, games: usize) -> Result<SelfPlayReport, BoardError> {
    let mut game = GameState::new(size)?;
    let mut report = SelfPlayReport {
        games,
        x_wins: 0,
        o_wins: 0,
        ties: 0,
        elapsed_secs: 0.0,
    };

    let start = Instant::now();
    for index in 0..games {
        game.restart();
        let status = play_out(engine, &mut game);
        match status {
            GameStatus::Won(Player::X) => report.x_wins += 1,
            GameStatus::Won(Player::O) => report.o_wins += 1,
            GameStatus::Draw => report.ties += 1,
            GameStatus::InProgress => warn!(index, "Game stopped before it finished"),
        }
        debug!(index, ?status, moves = game.move_count(), "Self-play game finished");
    }
    report.elapsed_secs = start.elapsed().as_secs_f64();

    info!(
        games = report.games,
        x_wins = report.x_wins,
        o_wins = report.o_wins,
        ties = report.ties,
        elapsed_secs = report.elapsed_secs,
        "Self-play finished"
    );
    Ok(report)
}

/// Lets the engine move for whoever is on turn until the game ends.
fn play_out(engine: &Engine, game: &mut GameState) -> GameStatus {
    while !game.is_over() {
        let mover = game.to_move();
        let Some(cell) = engine.select_move(game.board_mut(), mover) else {
            break;
        };
        if let Err(e) = game.make_move(cell) {
            warn!(error = %e, %cell, "Engine chose an illegal move");
            break;
        }
    }
    game.status()
}
