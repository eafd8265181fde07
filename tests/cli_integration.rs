//! Integration tests for the `tl` CLI.
//!
//! Each test runs `tl` as a subprocess and checks stdout, stderr and the
//! exit status. The TUI itself needs a terminal, so only non-interactive
//! paths are exercised here.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

/// Get the path to the built `tl` binary.
fn tl_bin() -> PathBuf {
    // cargo test builds to target/debug/
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("tl");
    path
}

fn run_tl(args: &[&str]) -> Output {
    Command::new(tl_bin())
        .args(args)
        .env_remove("TASKLIST_LOG")
        .output()
        .expect("failed to run tl")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn check_all_valid() {
    let output = run_tl(&["check", "Buy milk", "  Call mom  "]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "added Buy milk\nadded Call mom\n");
}

#[test]
fn check_reports_rejections_and_fails() {
    let output = run_tl(&["check", " Buy milk ", "buy milk", "   "]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "added Buy milk\n\
         rejected \"buy milk\": Task already exists.\n\
         rejected \"   \": Task cannot be empty.\n"
    );
    assert!(stderr(&output).contains("error: 2 item(s) rejected"));
}

#[test]
fn check_json_output() {
    let output = run_tl(&["check", "--json", "X", "x"]);
    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], false);
    assert_eq!(value["tasks"], serde_json::json!(["X"]));
    assert_eq!(value["items"][0]["status"], "added");
    assert_eq!(value["items"][0]["task"], "X");
    assert_eq!(value["items"][1]["status"], "rejected");
    assert_eq!(value["items"][1]["reason"], "duplicate_task");
}

#[test]
fn check_json_success() {
    let output = run_tl(&["check", "--json", "only one"]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["valid"], true);
    assert_eq!(value["tasks"], serde_json::json!(["only one"]));
}

#[test]
fn check_without_items_is_usage_error() {
    let output = run_tl(&["check"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn missing_explicit_config_fails_before_tui() {
    let tmp = tempfile::TempDir::new().unwrap();
    let missing = tmp.path().join("absent.toml");
    let output = run_tl(&["--config", missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not read"));
}

#[test]
fn invalid_config_fails_before_tui() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[behavior]\nconfirm_exit = 3\n").unwrap();
    let output = run_tl(&["--config", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("could not parse"));
}

#[test]
fn version_flag() {
    let output = run_tl(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("tl "));
}
