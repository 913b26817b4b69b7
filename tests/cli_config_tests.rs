//! End-to-end tests for `fortune-palette config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_config_show_default() {
    let output = run(&["config", "show"]);
    assert_exit_code(&output, 0);

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Output"));
    assert!(stdout.contains("Port: 3001"));
}

#[test]
fn test_config_show_json_format() {
    let output = run(&["config", "show", "--json"]);
    assert_exit_code(&output, 0);

    let result = stdout_json(&output);
    assert!(result["output"].is_object(), "Should have output object");
    assert!(result["web"].is_object(), "Should have web object");
    assert_eq!(result["output"]["uppercase_hex"], false);
    assert_eq!(result["web"]["host"], "127.0.0.1");
}

#[test]
fn test_config_show_broken_file() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "[web\nport =").unwrap();

    let output = run_with_config(&["config", "show"], config_dir.path());
    assert_exit_code(&output, 1);
}

// ============================================================================
// Set Command Tests
// ============================================================================

#[test]
fn test_config_set_and_show() {
    let config_dir = TempDir::new().unwrap();

    let set = run_with_config(
        &["config", "set", "--web-port", "8080", "--pretty-json", "false"],
        config_dir.path(),
    );
    assert_exit_code(&set, 0);
    assert!(config_dir.path().join("config.toml").exists());

    let show = run_with_config(&["config", "show", "--json"], config_dir.path());
    assert_exit_code(&show, 0);
    let result = stdout_json(&show);
    assert_eq!(result["web"]["port"], 8080);
    assert_eq!(result["output"]["pretty_json"], false);
}

#[test]
fn test_config_set_requires_an_option() {
    let output = run(&["config", "set"]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_config_set_rejects_port_zero() {
    let config_dir = TempDir::new().unwrap();
    let output = run_with_config(&["config", "set", "--web-port", "0"], config_dir.path());
    assert_exit_code(&output, 1);
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_config_path_uses_override() {
    let config_dir = TempDir::new().unwrap();
    let output = run_with_config(&["config", "path"], config_dir.path());
    assert_exit_code(&output, 0);
    assert!(stdout_text(&output)
        .trim()
        .ends_with("config.toml"));
    assert!(stdout_text(&output).contains(&*config_dir.path().to_string_lossy()));
}
