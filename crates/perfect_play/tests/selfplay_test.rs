//! Self-play benchmark runs.

use perfect_play::selfplay;
use perfect_tictactoe::Engine;

#[test]
fn test_perfect_play_always_draws() {
    let report = selfplay::run(&Engine::new(), 3, 5).unwrap();
    assert_eq!(report.games, 5);
    assert_eq!(report.ties, 5);
    assert_eq!(report.x_wins + report.o_wins, 0);
    assert!(report.elapsed_secs >= 0.0);
}

#[test]
fn test_one_by_one_board_goes_to_x() {
    let report = selfplay::run(&Engine::new(), 1, 3).unwrap();
    assert_eq!(report.x_wins, 3);
}

#[test]
fn test_zero_games() {
    let report = selfplay::run(&Engine::new(), 3, 0).unwrap();
    assert_eq!(report.games, 0);
    assert_eq!(report.throughput(), 0.0);
}

#[test]
fn test_invalid_size() {
    assert!(selfplay::run(&Engine::new(), 0, 1).is_err());
}

#[test]
fn test_report_as_json() {
    let report = selfplay::run(&Engine::new(), 3, 2).unwrap();
    let value: serde_json::Value = serde_json::to_value(report).unwrap();
    assert_eq!(value["games"], 2);
    assert_eq!(value["ties"], 2);
    assert_eq!(value["x_wins"], 0);
    assert!(value["elapsed_secs"].is_number());
}
