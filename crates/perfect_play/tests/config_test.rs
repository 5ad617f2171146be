//! Loading configuration files.

use perfect_play::PlayConfig;
use perfect_tictactoe::{Player, Scoring};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_file() {
    let file = write_config(
        r#"
board_size = 4
human_symbol = "o"
self_play_games = 20

[scoring]
win = 1000
tie = 0
infinity = 100000
"#,
    );
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 4);
    assert_eq!(*config.human_symbol(), Some(Player::O));
    assert_eq!(*config.self_play_games(), 20);
    assert_eq!(
        *config.scoring(),
        Scoring {
            win: 1000,
            tie: 0,
            infinity: 100_000
        }
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_keys_use_defaults() {
    let file = write_config("human_symbol = \"X\"\n\n[scoring]\nwin = 50\n");
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.board_size(), 3);
    assert_eq!(*config.human_symbol(), Some(Player::X));
    assert_eq!(*config.self_play_games(), 1000);
    assert_eq!(config.scoring().win, 50);
    assert_eq!(config.scoring().infinity, Scoring::default().infinity);
}

#[test]
fn test_unparseable_file() {
    let file = write_config("board_size = \"three\"\n");
    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_explicit_missing_path_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlayConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_invalid_values_fail_validation() {
    let file = write_config("board_size = 12\n");
    let config = PlayConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_round_trip_through_toml() {
    let config = PlayConfig::default()
        .with_board_size(4)
        .with_human_symbol(Some(Player::O));
    let text = toml::to_string(&config).unwrap();
    assert!(text.contains("human_symbol = \"o\""));
    assert_eq!(toml::from_str::<PlayConfig>(&text).unwrap(), config);
}

#[test]
fn test_extreme_scoring_is_rejected() {
    let file = write_config("[scoring]\nwin = -2147483648\n");
    let config = PlayConfig::from_file(file.path()).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.message.contains("must be positive"));
}
