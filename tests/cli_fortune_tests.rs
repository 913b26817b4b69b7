//! End-to-end tests for `fortune-palette fortune`.

mod fixtures;
use fixtures::*;

#[test]
fn test_fortune_known_date_json() {
    let output = run(&["fortune", "--date", "2000-01-01", "--json"]);
    assert_exit_code(&output, 0);

    let reading = stdout_json(&output);
    assert_eq!(reading["day_pillar"], "무오");
    assert_eq!(reading["day_branch"], "오");
    assert_eq!(reading["element_label"], "토");
    assert_eq!(reading["element_color"], "#FFD54F");
    assert_eq!(reading["character"]["name"], "노란 말");
    assert_eq!(reading["character"]["image_url"], "/characters/말.png");
    assert_eq!(reading["compatibility"], "normal");
}

#[test]
fn test_fortune_time_does_not_change_pillar() {
    let without = stdout_json(&run(&["fortune", "--date", "1900-01-01", "--json"]));
    let with = stdout_json(&run(&[
        "fortune", "--date", "1900-01-01", "--time", "23:45", "--json",
    ]));
    assert_eq!(without["day_pillar"], "갑술");
    assert_eq!(with["day_pillar"], "갑술");
    assert!(with["birth_time"].is_string());
}

#[test]
fn test_fortune_human_output() {
    let output = run(&["fortune", "--date", "2000-01-01"]);
    assert_exit_code(&output, 0);

    let stdout = stdout_text(&output);
    assert!(stdout.contains("무오일주"));
    assert!(stdout.contains("경신일주"));
}

#[test]
fn test_fortune_invalid_date() {
    let output = run(&["fortune", "--date", "2000-13-01"]);
    assert_exit_code(&output, 1);
    assert!(stderr_text(&output).contains("Invalid birth date"));
}

#[test]
fn test_fortune_invalid_time() {
    let output = run(&["fortune", "--date", "2000-01-01", "--time", "noon"]);
    assert_exit_code(&output, 1);
}
