//! Integration tests for CLI argument parsing.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Course notebook tooling"))
        .stdout(predicate::str::contains("install"))
        .stdout(predicate::str::contains("linkcheck"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_no_subcommand_fails_with_usage() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn linkcheck_on_empty_root_warns_but_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.args(["linkcheck", "--root"]).arg(temp.path());
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("missing folder"));
    Ok(())
}

#[test]
fn linkcheck_help_documents_timeout() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.args(["linkcheck", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--timeout"));
    Ok(())
}

#[test]
fn install_help_documents_flags() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.args(["install", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--no-fallback"))
        .stdout(predicate::str::contains("--with-glpk"));
    Ok(())
}

#[test]
fn completions_emits_bash_script() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("nbkit"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("nbkit"));
    Ok(())
}
