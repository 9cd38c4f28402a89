//! Integration tests for the CLI skeleton: help, version, argument parsing.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn func() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("func"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    func()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Create and inspect serverless functions"));
}

#[test]
fn test_cli_no_args_with_env_globals_still_shows_help() {
    func()
        .env("FUNC_VERBOSE", "1")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Create and inspect serverless functions"))
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_help_lists_commands() {
    func()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_cli_version_flag_shows_version() {
    func()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_create_help_shows_flags_and_examples() {
    func()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--runtime"))
        .stdout(predicate::str::contains("--template"))
        .stdout(predicate::str::contains("--repositories"))
        .stdout(predicate::str::contains("--confirm"))
        .stdout(predicate::str::contains("func create --runtime quarkus sample-service"));
}

#[test]
fn test_create_rejects_two_positional_paths() {
    func()
        .args(["create", "one", "two"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_unknown_command_fails() {
    func().arg("deploy").assert().code(2);
}

#[test]
fn test_new_alias_runs_create_help() {
    func()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--runtime"));
}

#[test]
fn test_create_help_lists_runtimes() {
    func()
        .args(["create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("springboot"))
        .stdout(predicate::str::contains("typescript"));
}

#[test]
fn test_completion_script_offers_runtimes() {
    func()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("func"))
        .stdout(predicate::str::contains("quarkus"));
}
