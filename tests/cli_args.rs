//! Tests for CLI argument parsing against the real binary.

mod common;

use common::temp_config;
use std::process::Command;

fn guess_number_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_guess-number"))
}

#[test]
fn test_help_lists_flags() {
    let output = guess_number_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--seed"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--no-confetti"));
}

#[test]
fn test_invalid_seed_is_rejected_by_clap() {
    let output = guess_number_cmd()
        .arg("--seed")
        .arg("not-a-number")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {}", stderr);
}

#[test]
fn test_broken_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui\n");
    let output = guess_number_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Failed to parse config file"), "got: {}", stderr);
}

#[test]
fn test_invalid_config_value_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntoast_seconds = 0\n");
    let output = guess_number_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"), "got: {}", stderr);
}
