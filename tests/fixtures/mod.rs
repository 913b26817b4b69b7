//! Shared test fixtures for E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every helper

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Path to the fortune-palette binary
pub fn fortune_palette_bin() -> &'static str {
    env!("CARGO_BIN_EXE_fortune-palette")
}

/// Runs the binary with `args` against the config directory `config_dir`.
pub fn run_with_config(args: &[&str], config_dir: &Path) -> Output {
    Command::new(fortune_palette_bin())
        .env("FORTUNE_PALETTE_CONFIG_DIR", config_dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs the binary with `args` and a fresh, empty config directory.
pub fn run(args: &[&str]) -> Output {
    let config_dir = TempDir::new().expect("Failed to create temp dir");
    run_with_config(args, config_dir.path())
}

/// Asserts the exit code, printing stderr on mismatch.
pub fn assert_exit_code(output: &Output, expected: i32) {
    assert_eq!(
        output.status.code(),
        Some(expected),
        "unexpected exit code. stdout: {} stderr: {}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

/// Parses stdout as JSON.
pub fn stdout_json(output: &Output) -> Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("Should parse JSON output")
}

/// Stdout as a string.
pub fn stdout_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Stderr as a string.
pub fn stderr_text(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
