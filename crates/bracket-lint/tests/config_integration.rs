//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert effective bracket settings and `check` to
//! confirm the settings actually drive validation.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

// =============================================================================
// Defaults & Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["bracket_pairs"], serde_json::json!(["()"]));
    assert_eq!(json["config"]["strategy"], "stack");
    assert!(json["config"]["config_file"].is_null());
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".bracket-lint.toml"),
        "bracket_pairs = [\"()\", \"[]\"]\n",
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(
        json["config"]["bracket_pairs"],
        serde_json::json!(["()", "[]"])
    );
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".bracket-lint.toml"));
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub = tmp.path().join("a").join("b");
    fs::create_dir_all(&sub).unwrap();
    fs::write(tmp.path().join("brackets.yaml"), "strategy: removal\n").unwrap();

    let json = info_json(&sub);
    assert_eq!(json["config"]["strategy"], "removal");
}

#[test]
fn bracket_lint_name_overrides_brackets_name() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("brackets.toml"), "strategy = \"removal\"\n").unwrap();
    fs::write(tmp.path().join("bracket-lint.toml"), "strategy = \"stack\"\n").unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["strategy"], "stack");
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".bracket-lint.json"),
        r#"{"bracket_pairs": ["<>"], "ignorable_symbols": ["-"]}"#,
    )
    .unwrap();

    let json = info_json(tmp.path());
    assert_eq!(json["config"]["bracket_pairs"], serde_json::json!(["<>"]));
    assert_eq!(json["config"]["ignorable_symbols"], serde_json::json!(["-"]));
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bracket-lint.toml"), "strategy = \"removal\"\n").unwrap();
    let explicit = tmp.path().join("custom.toml");
    fs::write(&explicit, "strategy = \"stack\"\n").unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["config"]["strategy"], "stack");
}

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(tmp.path().join(".bracket-lint.toml"), "strategy = \"removal\"\n").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let json = info_json(&src);
    assert_eq!(json["config"]["strategy"], "stack");
    assert!(json["config"]["config_file"].is_null());
}

// =============================================================================
// Config Drives Validation
// =============================================================================

#[test]
fn configured_pairs_are_used_by_check() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".bracket-lint.toml"),
        "bracket_pairs = [\"()\", \"{}\"]\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "--text", "({})"])
        .assert()
        .success()
        .stdout(predicate::str::contains("balanced"));
}

#[test]
fn configured_ignorable_symbols_replace_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".bracket-lint.toml"),
        "ignorable_symbols = [\"_\"]\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "--text", "(_)"])
        .assert()
        .success();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "--text", "( )"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid symbol"));
}

#[test]
fn malformed_pair_in_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bracket-lint.toml"), "bracket_pairs = [\"(\"]\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "--text", "()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exactly 2 characters"));
}

#[test]
fn input_limit_from_config_is_enforced() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bracket-lint.toml"), "max_input_bytes = 4\n").unwrap();
    fs::write(tmp.path().join("input.txt"), "((((()))))").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "check", "input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Invalid Config Files
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bracket-lint.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_strategy_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".bracket-lint.yaml"), "strategy: regex\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure();
}
