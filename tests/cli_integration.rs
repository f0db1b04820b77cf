//! CLI integration tests for tasklist
//!
//! The interactive screen needs a real terminal, so these tests cover
//! argument handling, configuration loading and the non-interactive
//! commands.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command instance for the tasklist binary, isolated from the
/// user's own configuration
fn tasklist_cmd(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("tasklist"));
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("TASKLIST_CONFIG");
    cmd
}

/// Write a config file and return its path
fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

// =============================================================================
// Help and version
// =============================================================================

#[test]
fn test_help_lists_commands_and_flags() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("priorities"))
        .stdout(predicate::str::contains("--filter"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Priorities
// =============================================================================

#[test]
fn test_priorities_text() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .arg("priorities")
        .assert()
        .success()
        .stdout("RANK\tLABEL\n1\tHigh\n2\tMedium\n3\tLow\n4\tNone\n");
}

#[test]
fn test_priorities_json() {
    let home = TempDir::new().unwrap();

    let output = tasklist_cmd(&home)
        .args(["priorities", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["label"], "High");
    assert_eq!(items[0]["rank"], 1);
    assert_eq!(items[3]["label"], "None");
    assert_eq!(items[3]["rank"], 4);
}

#[test]
fn test_verbose_goes_to_stderr() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .args(["priorities", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[verbose").not())
        .stderr(predicate::str::contains("[verbose] tasklist starting"));
}

// =============================================================================
// Argument errors
// =============================================================================

#[test]
fn test_unknown_filter_rejected() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .args(["--filter", "urgent", "priorities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown priority"));
}

#[test]
fn test_filter_accepts_labels_and_ranks() {
    let home = TempDir::new().unwrap();

    for filter in ["all", "High", "2", "none"] {
        tasklist_cmd(&home)
            .args(["--filter", filter, "priorities"])
            .assert()
            .success();
    }
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_missing_config_file_fails() {
    let home = TempDir::new().unwrap();

    tasklist_cmd(&home)
        .args(["--config", "does-not-exist.toml", "priorities"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn test_malformed_config_fails() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "[tui]\ndefault_filter = \"urgent\"\n");

    tasklist_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("priorities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse configuration"));
}

#[test]
fn test_invalid_tick_rate_fails() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "[tui]\ntick_rate_ms = 0\n");

    tasklist_cmd(&home)
        .arg("--config")
        .arg(&path)
        .arg("priorities")
        .assert()
        .failure()
        .stderr(predicate::str::contains("tick_rate_ms"));
}

#[test]
fn test_valid_config_is_accepted() {
    let home = TempDir::new().unwrap();
    let path = write_config(
        &home,
        "[tui]\ntick_rate_ms = 100\ndefault_filter = \"high\"\nshow_hints = false\n",
    );

    tasklist_cmd(&home)
        .arg("--config")
        .arg(&path)
        .args(["priorities", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("tick_rate_ms: 100"));
}

#[test]
fn test_config_path_from_env() {
    let home = TempDir::new().unwrap();
    let path = write_config(&home, "[tui]\ntick_rate_ms = 0\n");

    tasklist_cmd(&home)
        .env("TASKLIST_CONFIG", &path)
        .arg("priorities")
        .assert()
        .failure();
}
