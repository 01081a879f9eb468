//! # Charlie Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and runs the compiled `charlie` binary through
//! `assert_cmd`.
//!
//! Every command is isolated from the developer's machine: the user config
//! directory points at a temporary directory, and `CHARLIE_CONFIG` and
//! `RUST_LOG` are cleared.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use tempfile::TempDir;

pub const GREETING_LINE: &str = "Charlie: Hello! How can I assist you today?";
pub const FAREWELL_LINE: &str = "Charlie: Goodbye! Have a great day!";

/// # Get Charlie Command (`charlie_cmd`)
///
/// Creates an `assert_cmd::Command` for the `charlie` binary with its config
/// lookup confined to `config_home`.
///
/// ## Panics
/// Panics if the `charlie` binary cannot be found via `Command::cargo_bin`.
pub fn charlie_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("charlie").expect("Failed to find charlie binary for testing");
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env_remove("CHARLIE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a fresh, empty config home for one test.
pub fn config_home() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp config home")
}
