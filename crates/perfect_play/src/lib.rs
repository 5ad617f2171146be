//! Perfect Play - terminal front end for the perfect tic-tac-toe engine
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Console**: prompts and rendering over any line reader and writer
//! - **Interactive**: the human-versus-engine session loop
//! - **Self-play**: engine-versus-engine benchmark

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod interactive;
pub mod selfplay;

pub use cli::{Cli, Command};
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, PlayConfig};
pub use console::{Console, Verdict};
pub use interactive::SessionSummary;
pub use selfplay::SelfPlayReport;
