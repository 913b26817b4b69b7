//! End-to-end tests for `fortune-palette palette`.

mod fixtures;
use fixtures::*;

#[test]
fn test_palette_json_shape() {
    let output = run(&["palette", "금융 투자 앱", "--json"]);
    assert_exit_code(&output, 0);

    let palette = stdout_json(&output);
    assert_eq!(palette["concept"], "금융 투자 앱");
    assert_eq!(palette["match"]["category"], "finance");
    assert_eq!(palette["primary"]["base"], "#1e3d59");
    assert_eq!(palette["primary"]["shades"].as_array().unwrap().len(), 10);

    let secondaries = palette["secondaries"].as_array().unwrap();
    assert_eq!(secondaries.len(), 4);
    for secondary in secondaries {
        assert_eq!(secondary["ramp"]["shades"].as_array().unwrap().len(), 10);
        assert!(secondary["description"].is_string());
    }
}

#[test]
fn test_palette_human_output() {
    let output = run(&["palette", "xyz"]);
    assert_exit_code(&output, 0);

    let stdout = stdout_text(&output);
    assert!(stdout.contains("Primary: Steel (#2196f3)"), "{stdout}");
    assert!(stdout.contains("보조1"));
    assert!(stdout.contains("보조4"));
}

#[test]
fn test_palette_respects_uppercase_config() {
    let config_dir = tempfile::TempDir::new().unwrap();
    let set = run_with_config(&["config", "set", "--uppercase-hex", "true"], config_dir.path());
    assert_exit_code(&set, 0);

    let output = run_with_config(&["palette", "xyz"], config_dir.path());
    assert_exit_code(&output, 0);
    assert!(stdout_text(&output).contains("#2196F3"));
}
