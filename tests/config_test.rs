//! Tests for loading the terminal UI configuration.

use std::io::Write;
use timetravel::TuiConfig;
use timetravel_tictactoe::HistoryOrder;

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "reverse_history = true\nhighlight_win_line = false\ntick_rate_ms = 100\nlog_filter = \"debug\""
    )
    .expect("write config");

    let config = TuiConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.history_order(), HistoryOrder::Descending);
    assert!(!*config.highlight_win_line());
    assert_eq!(*config.tick_rate_ms(), 100);
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = TuiConfig::load_or_default(dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(config, TuiConfig::default());
    assert_eq!(config.history_order(), HistoryOrder::Ascending);
}

#[test]
fn test_malformed_file_reports_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "reverse_history = \"sometimes\"").expect("write config");

    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}
