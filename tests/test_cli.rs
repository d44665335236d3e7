//! Tests for CLI argument parsing

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use tfjs_wizard::cli::Cli;

#[test]
fn test_cli_defaults_to_converting() {
    let cli = Cli::parse_from(["tfjs-wizard"]);
    assert!(!cli.dry_run, "Default should run the converter");
}

#[test]
fn test_cli_dryrun_flag() {
    let cli = Cli::parse_from(["tfjs-wizard", "--dryrun"]);
    assert!(cli.dry_run);
}

#[test]
fn test_cli_rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["tfjs-wizard", "--dry-run"]).is_err());
    assert!(Cli::try_parse_from(["tfjs-wizard", "--input_format=keras"]).is_err());
}

#[test]
fn test_cli_rejects_positional_argument() {
    assert!(Cli::try_parse_from(["tfjs-wizard", "model.h5"]).is_err());
}

#[test]
fn test_binary_usage_error_on_extra_argument() {
    Command::cargo_bin("tfjs-wizard")
        .unwrap()
        .arg("/models/mobilenet")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_binary_help_mentions_dryrun() {
    Command::cargo_bin("tfjs-wizard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--dryrun"));
}
