//! Integration tests for the command-line surface.
//!
//! Only error paths and informational flags are exercised here; a valid
//! duration would take over the terminal.

use assert_cmd::Command;
use predicates::prelude::*;

fn countdown_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_countdown"))
}

// ============================================================================
// Usage Errors
// ============================================================================

#[test]
fn no_arguments_exits_2_with_usage() {
    countdown_cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn two_arguments_exit_2_with_usage() {
    countdown_cmd()
        .args(["25s", "10s"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn three_arguments_exit_2() {
    countdown_cmd().args(["1s", "2s", "3s"]).assert().code(2);
}

// ============================================================================
// Parse Errors
// ============================================================================

#[test]
fn invalid_duration_exits_2_naming_input() {
    countdown_cmd()
        .arg("abc")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("abc"))
        .stderr(predicate::str::contains("invalid duration"));
}

#[test]
fn unknown_unit_exits_2() {
    countdown_cmd()
        .arg("5d")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("5d"));
}

#[test]
fn duration_without_unit_exits_2() {
    countdown_cmd().arg("25").assert().code(2);
}

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_shows_examples_and_keys() {
    countdown_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("countdown 1m50s"))
        .stdout(predicate::str::contains("countdown 2h45m50s"))
        .stdout(predicate::str::contains("restart"));
}

#[test]
fn version_exits_0() {
    countdown_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
