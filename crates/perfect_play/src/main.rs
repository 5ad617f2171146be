//! Perfect Play - Unified CLI
//!
//! Interactive play against the engine, or an engine-versus-engine benchmark.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use perfect_play::{Cli, Command, Console, PlayConfig, interactive, selfplay};
use perfect_tictactoe::Player;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    match cli.command.unwrap_or_default() {
        Command::Play { symbol } => run_play(config, symbol),
        Command::SelfPlay { games, quiet, json } => run_self_play(config, games, quiet, json),
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Resolves the config file and applies the global CLI overrides.
#[instrument(skip(cli), fields(config_path = ?cli.config))]
fn load_config(cli: &Cli) -> Result<PlayConfig> {
    let mut config = PlayConfig::load(cli.config.as_deref())?;

    if let Some(size) = cli.size {
        info!(size, "Overriding board size");
        config = config.with_board_size(size);
    }

    config.validate()?;
    Ok(config)
}

/// Run the interactive game
#[instrument(skip(config))]
fn run_play(config: PlayConfig, symbol: Option<Player>) -> Result<()> {
    let config = match symbol {
        Some(symbol) => config.with_human_symbol(Some(symbol)),
        None => config,
    };
    let engine = config.engine();

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    let summary = interactive::run(&mut console, &engine, &config)?;
    info!(games = summary.games, "Interactive session finished");
    Ok(())
}

/// Run the self-play benchmark
#[instrument(skip(config))]
fn run_self_play(config: PlayConfig, games: Option<usize>, quiet: bool, json: bool) -> Result<()> {
    let config = match games {
        Some(games) => config.with_self_play_games(games),
        None => config,
    };
    let engine = config.engine();

    let report = selfplay::run(&engine, *config.board_size(), *config.self_play_games())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if !quiet {
        println!("{}", report);
    }
    Ok(())
}
