//! Integration tests for blasetables CLI

use std::fs;
use std::process::Command;

use tempfile::tempdir;

fn fixture() -> String {
    format!("{}/tests/fixtures/games.json", env!("CARGO_MANIFEST_DIR"))
}

fn run_blasetables_with_code(args: &[&str]) -> (String, String, Option<i32>) {
    let mut cmd_args = vec!["run", "-q", "-p", "blasetables", "--"];
    cmd_args.extend(args);

    let output = Command::new("cargo")
        .args(&cmd_args)
        .current_dir(env!("CARGO_MANIFEST_DIR").to_string() + "/..")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

fn run_blasetables(args: &[&str]) -> (String, String, bool) {
    let (stdout, stderr, code) = run_blasetables_with_code(args);
    (stdout, stderr, code == Some(0))
}

fn table_lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| l.starts_with('|')).collect()
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_blasetables(&["--help"]);

    assert!(success);
    assert!(stdout.contains("blasetables"));
    assert!(stdout.contains("--data"));
    assert!(stdout.contains("--name-style"));
    assert!(stdout.contains("--home-away"));
    assert!(stdout.contains("--markdown"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_blasetables(&["--version"]);

    assert!(success);
    assert!(stdout.contains("blasetables"));
}

#[test]
fn test_shutout_markdown_limited_to_one() {
    let data = fixture();
    let (stdout, _, success) =
        run_blasetables(&["--data", &data, "-r", "shutout", "-n", "1", "--markdown"]);

    assert!(success);
    let lines = table_lines(&stdout);
    // header, separator, one game
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "| Sea | Day | Winner | Score | Score | Loser |");
    assert_eq!(lines[2], "| 4 | 102* | Tigers | 7 | 0 | Dalé |");
    assert!(stdout.contains("Shutout games (games where the loser had zero runs) for all time"));
    assert!(stdout.contains("(asterisk indicates a postseason game)"));
}

#[test]
fn test_console_table() {
    let data = fixture();
    let (stdout, _, success) = run_blasetables(&["--data", &data, "-r", "shutout"]);

    assert!(success);
    assert!(stdout.contains("┃ Sea ┃ Day ┃ Post ┃ Winner"));
    assert!(stdout.contains("│ Y    │ Tigers"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with('│')).count(), 2);
    assert!(stdout.contains("for all teams (note: all days and seasons displayed are 1-indexed)"));
}

#[test]
fn test_underdog_odds() {
    let data = fixture();
    let (stdout, _, success) =
        run_blasetables(&["--data", &data, "-r", "underdog", "--home-away", "--markdown"]);

    assert!(success);
    assert!(stdout.contains("| 3 | 10 | Moist Talkers (37%) | 5 | 0 | Crabs (63%) |"));
}

#[test]
fn test_underdog_without_odds_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("games.json");
    let raw = fs::read_to_string(fixture()).unwrap();
    let mut value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    value["underdog"] = value["blowout"].clone();
    fs::write(&path, serde_json::to_string(&value).unwrap()).unwrap();

    let (_, stderr, success) = run_blasetables(&[
        "--data",
        path.to_str().unwrap(),
        "-r",
        "underdog",
        "--markdown",
    ]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("missing field 'winningOdds'"));
}

#[test]
fn test_filters_in_caption() {
    let data = fixture();
    let (stdout, _, success) = run_blasetables(&[
        "--data",
        &data,
        "-r",
        "shutout",
        "-s",
        "4",
        "--postseason",
        "-t",
        "Tigers",
        "--markdown",
    ]);

    assert!(success);
    assert!(stdout.contains("for season 4 (postseason only) for team Tigers"));
    assert_eq!(table_lines(&stdout).len(), 3);
}

#[test]
fn test_emoji_and_pitchers() {
    let data = fixture();
    let (stdout, _, success) = run_blasetables(&[
        "--data",
        &data,
        "-r",
        "blowout",
        "--winning-pitcher",
        "--losing-pitcher",
        "--name-style",
        "emoji",
        "--markdown",
    ]);

    assert!(success);
    let lines = table_lines(&stdout);
    assert_eq!(lines[0], "| Sea | Day | WP | Winner | Score | Score | Loser | LP |");
    assert_eq!(
        lines[1],
        "| ------ | ------ | ------ | :------: | ------ | ------: | :------: | ------ |"
    );
    assert_eq!(
        lines[2],
        "| 1 | 4 | Nic Winkler | \u{1F339} | 17 | 3 | \u{1F3B8} | Sixpack Dogwalker |"
    );
}

#[test]
fn test_output_file_accumulates_tables() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tables.md");
    fs::write(&out, "previous run").unwrap();
    let data = fixture();

    let (stdout, _, success) = run_blasetables(&[
        "--data",
        &data,
        "--markdown",
        "--force",
        "-o",
        out.to_str().unwrap(),
    ]);

    assert!(success);
    assert!(stdout.is_empty());
    let written = fs::read_to_string(&out).unwrap();
    assert!(!written.contains("previous run"));
    let blowout = written.find("Blowout games").unwrap();
    let shutout = written.find("Shutout games").unwrap();
    let underdog = written.find("Underdog games").unwrap();
    assert!(blowout < shutout && shutout < underdog);
}

#[test]
fn test_output_directory_missing() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("missing").join("tables.md");
    let data = fixture();

    let (_, stderr, success) =
        run_blasetables(&["--data", &data, "-o", out.to_str().unwrap()]);

    assert!(!success);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn test_unknown_reason() {
    let data = fixture();
    let (_, stderr, success) = run_blasetables(&["--data", &data, "-r", "nailbiter"]);

    assert!(!success);
    assert!(stderr.contains("Valid reasons: blowout, shutout, shame, underdog, maxedout, defensive"));
}

#[test]
fn test_invalid_season() {
    let data = fixture();
    let (_, stderr, success) = run_blasetables(&["--data", &data, "-s", "zero"]);

    assert!(!success);
    assert!(stderr.contains("invalid season 'zero'"));
}

#[test]
fn test_usage_error_exits_with_one() {
    let data = fixture();
    let (_, stderr, code) = run_blasetables_with_code(&["--data", &data, "--name-style", "fancy"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error: invalid value 'fancy'"));
}

#[test]
fn test_missing_data_exits_with_one() {
    let (_, stderr, code) = run_blasetables_with_code(&["-r", "shutout"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("--data"));
}

#[test]
fn test_repeated_reason_renders_once() {
    let data = fixture();
    let (stdout, _, success) = run_blasetables(&[
        "--data", &data, "-r", "shutout", "-r", "shutout", "--markdown",
    ]);

    assert!(success);
    assert_eq!(stdout.matches("Shutout games").count(), 1);
}
