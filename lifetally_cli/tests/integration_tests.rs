//! Integration tests for the lifetally binary.
//!
//! These tests verify end-to-end behavior including:
//! - Deterministic stat rendering with a fixed reference time
//! - JSON output mode
//! - Submission logging and CSV rollup
//! - Input validation and fallbacks

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("lifetally"))
}

/// The fixed end-to-end scenario: born Christmas 1972, observed at a
/// pinned instant in 2026
fn scenario_args() -> [&'static str; 7] {
    [
        "stats",
        "1972-12-25",
        "--country",
        "us",
        "--gender",
        "male",
        "--at",
    ]
}

const SCENARIO_AT: &str = "2026-02-07T00:00:00Z";

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Life statistics calculator"));
}

#[test]
fn test_stats_deterministic_output() {
    let temp_dir = setup_test_dir();

    cli()
        .args(scenario_args())
        .arg(SCENARIO_AT)
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("19,402 days"))
        .stdout(predicate::str::contains("Capricorn"))
        .stdout(predicate::str::contains("Baby Boomer"))
        .stdout(predicate::str::contains("Turquoise"));
}

#[test]
fn test_stats_json_output() {
    let temp_dir = setup_test_dir();

    let output = cli()
        .args(scenario_args())
        .arg(SCENARIO_AT)
        .arg("--json")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stats: serde_json::Value =
        serde_json::from_slice(&output).expect("stdout should be valid JSON");

    assert_eq!(stats["elapsed"]["days"], 19_402);
    assert_eq!(stats["body"]["heartbeats"], 19_402_i64 * 100_800);
    assert_eq!(stats["birth_info"]["western_zodiac"]["name"], "Capricorn");
    assert_eq!(stats["birth_info"]["generation"]["name"], "Baby Boomer");
    assert_eq!(stats["clubs"]["billion_seconds"], true);
    assert_eq!(
        stats["clubs"]["days_until_billion_seconds"],
        serde_json::Value::Null
    );
}

#[test]
fn test_stats_logged_to_submission_log() {
    let temp_dir = setup_test_dir();

    cli()
        .args(scenario_args())
        .arg(SCENARIO_AT)
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    let log_path = temp_dir.path().join("submissions/inputs.jsonl");
    let log_content = fs::read_to_string(&log_path).expect("Failed to read submission log");
    assert!(log_content.contains("\"birth_date\":\"1972-12-25\""));
    assert!(log_content.contains("\"gender\":\"male\""));
}

#[test]
fn test_no_log_skips_submission_log() {
    let temp_dir = setup_test_dir();

    cli()
        .args(scenario_args())
        .arg(SCENARIO_AT)
        .arg("--no-log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(!temp_dir.path().join("submissions/inputs.jsonl").exists());
}

#[test]
fn test_future_birth_date_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("2999-01-01")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_malformed_birth_date_rejected() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("25-12-1972")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .failure();
}

#[test]
fn test_unknown_country_falls_back() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("1990-06-15")
        .arg("--country")
        .arg("atlantis")
        .arg("--no-log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown country"));
}

#[test]
fn test_unknown_gender_warns_and_continues() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("1990-06-15")
        .arg("--gender")
        .arg("other")
        .arg("--no-log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Unknown gender"));
}

#[test]
fn test_share_digest() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("share")
        .arg("1972-12-25")
        .arg("--at")
        .arg(SCENARIO_AT)
        .arg("--no-log")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("I've been alive for 19,402 days"))
        .stdout(predicate::str::contains("Capricorn"));
}

#[test]
fn test_rollup_creates_csv() {
    let temp_dir = setup_test_dir();

    // Log a few submissions
    for birthdate in ["1972-12-25", "1990-06-15", "2001-03-09"] {
        cli()
            .arg("stats")
            .arg(birthdate)
            .arg("--data-dir")
            .arg(temp_dir.path())
            .assert()
            .success();
    }

    cli()
        .arg("rollup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Rolled up 3 submissions"));

    let csv_path = temp_dir.path().join("submissions.csv");
    let csv_content = fs::read_to_string(&csv_path).expect("Failed to read CSV");
    assert!(csv_content.contains("id,submitted_at,birth_date,country,gender"));
    assert!(csv_content.contains("1990-06-15"));
}

#[test]
fn test_rollup_with_cleanup() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("stats")
        .arg("1985-11-05")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success();

    cli()
        .arg("rollup")
        .arg("--cleanup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleaned up 1 processed log"));

    let entries: Vec<_> = fs::read_dir(temp_dir.path().join("submissions"))
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".processed"))
        .collect();
    assert_eq!(entries.len(), 0);
}

#[test]
fn test_empty_rollup() {
    let temp_dir = setup_test_dir();

    cli()
        .arg("rollup")
        .arg("--data-dir")
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to roll up"));
}
