use collate_core::cli::config::config_error_hint;
use collate_core::conf::{ConfigError, load_config, parse_config, resolve_log_file};
use integration_tests::harness::fixture_path;
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[test]
fn sample_config_loads() {
    // Act
    let cfg = load_config(&fixture_path("collate.hcl")).expect("config should load");

    // Assert
    assert_eq!(cfg.tail.poll_interval(), Duration::from_millis(100));
    assert_eq!(cfg.dashboard.max_hexes, 25);
    assert_eq!(
        resolve_log_file(&cfg, None).expect("log file set"),
        PathBuf::from("/var/log/dumpvdl2.log")
    );
}

#[test]
fn command_line_log_file_overrides_config() {
    // Arrange
    let cfg = load_config(&fixture_path("collate.hcl")).expect("config should load");

    // Act
    let path = resolve_log_file(&cfg, Some(PathBuf::from("live.log"))).expect("resolved");

    // Assert
    assert_eq!(path, PathBuf::from("live.log"));
}

#[test]
fn unknown_block_gets_layout_hint() {
    // Act
    let err = parse_config("tailer { log_file = \"x\" }", Path::new("bad.hcl"))
        .expect_err("unknown block should be rejected");

    // Assert
    assert!(matches!(err, ConfigError::Parse { .. }));
    let hint = config_error_hint(&err).expect("parse errors carry a hint");
    assert!(hint.contains("poll_interval_ms = 100"));
}
