//! CLI integration tests using the REAL clientctl binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
fn clientctl_cmd() -> Command {
    Command::cargo_bin("clientctl").unwrap()
}

#[test]
fn test_help_output() {
    clientctl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("client installer"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("version"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    clientctl_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("clientctl"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_install_help_mentions_options() {
    clientctl_cmd()
        .args(["install", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--dir"))
        .stdout(predicate::str::contains("--manifest"));
}

#[test]
fn test_completions_bash() {
    clientctl_cmd()
        .args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clientctl"));
}

#[test]
fn test_completions_unknown_shell() {
    clientctl_cmd()
        .args(["completions", "--shell", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn test_unknown_subcommand_fails() {
    clientctl_cmd().arg("uninstall").assert().failure();
}
