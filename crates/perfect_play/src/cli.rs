//! Command-line interface for perfect_play.

use clap::{Parser, Subcommand};
use perfect_tictactoe::Player;
use std::path::PathBuf;

/// Perfect Play - tic-tac-toe against an engine that never loses
#[derive(Parser, Debug)]
#[command(name = "perfect_play")]
#[command(about = "Play tic-tac-toe against an exact alpha-beta engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to perfect_play.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Board side length, overriding the config file
    #[arg(long, global = true)]
    pub size: Option<usize>,

    /// Subcommand to run; interactive play when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Play against the engine in the terminal
    Play {
        /// Symbol to play (x or o); prompted for when omitted
        #[arg(long)]
        symbol: Option<Player>,
    },

    /// Let the engine play both sides and report throughput
    #[command(alias = "selfplay")]
    SelfPlay {
        /// Number of games, overriding the config file
        games: Option<usize>,

        /// Suppress the report
        #[arg(short, long)]
        quiet: bool,

        /// Print the report as JSON
        #[arg(long, conflicts_with = "quiet")]
        json: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { symbol: None }
    }
}
