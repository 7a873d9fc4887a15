//! CLI integration tests.
//!
//! Every test here stays offline: only paths that never reach the network
//! are exercised (existing-file skips, check, clean, completions, and
//! configuration errors that fail before fetching).

use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("embercert").unwrap()
}

#[test]
fn generate_skips_existing_header_without_network() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");
    fs::write(&header, "pre-existing bytes").unwrap();

    cmd()
        .args(["generate", "--url", "http://localhost:1/unreachable", "--output"])
        .arg(&header)
        .assert()
        .success()
        .stdout(contains("already exists"));

    assert_eq!(fs::read_to_string(&header).unwrap(), "pre-existing bytes");
}

#[test]
fn generate_rejects_invalid_variable_name_before_fetching() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");

    cmd()
        .args(["generate", "--url", "http://localhost:1/unreachable", "--name", "not a name", "--output"])
        .arg(&header)
        .assert()
        .failure()
        .stderr(contains("not a valid C identifier"));

    assert!(!header.exists());
}

#[test]
fn check_reports_existing_header() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");
    fs::write(&header, "content").unwrap();

    cmd()
        .args(["check", "--output"])
        .arg(&header)
        .assert()
        .success()
        .stdout(contains("7 bytes"));
}

#[test]
fn check_fails_on_missing_header() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");

    cmd()
        .args(["check", "--output"])
        .arg(&header)
        .assert()
        .failure()
        .stderr(contains("missing"));
}

#[test]
fn clean_removes_header() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");
    fs::write(&header, "content").unwrap();

    cmd()
        .args(["clean", "--output"])
        .arg(&header)
        .assert()
        .success()
        .stdout(contains("Removed"));

    assert!(!header.exists());
}

#[test]
fn clean_dry_run_keeps_header() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");
    fs::write(&header, "content").unwrap();

    cmd()
        .args(["clean", "--dry-run", "--output"])
        .arg(&header)
        .assert()
        .success()
        .stdout(contains("Would remove"));

    assert!(header.exists());
}

#[test]
fn clean_on_missing_header_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    let header = temp.path().join("ca.h");

    cmd()
        .args(["clean", "--output"])
        .arg(&header)
        .assert()
        .success()
        .stdout(contains("Nothing to clean"));
}

#[test]
fn completions_emit_script() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(contains("embercert"));
}

#[test]
fn help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("generate"))
        .stdout(contains("check"))
        .stdout(contains("clean"));
}
