//! CLI end-to-end tests
//!
//! Tests for the playcaps command-line interface.

mod common;

use assert_cmd::prelude::*;
use common::fixture_path;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the playcaps binary
#[allow(deprecated)]
fn playcaps_cmd() -> Command {
    Command::cargo_bin("playcaps").unwrap()
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = playcaps_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = playcaps_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("playcaps"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = playcaps_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("playcaps "));
}

#[test]
fn test_cli_profile_from_fixture() {
    let mut cmd = playcaps_cmd();
    cmd.arg("--config")
        .arg(fixture_path("chrome_desktop.toml"))
        .arg("profile")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"DirectPlayProfiles\""))
        .stdout(predicate::str::contains("\"Container\":\"mp4,m4v\""));
}

#[test]
fn test_cli_profile_pretty_is_valid_json() {
    let output = playcaps_cmd()
        .arg("-c")
        .arg(fixture_path("webos.toml"))
        .arg("profile")
        .arg("--pretty")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["MaxStreamingBitrate"], 120_000_000);
    assert!(json["TranscodingProfiles"].as_array().unwrap().len() > 1);
}

#[test]
fn test_cli_probe_report() {
    let mut cmd = playcaps_cmd();
    cmd.arg("--config")
        .arg(fixture_path("tizen.toml"))
        .arg("probe")
        .assert()
        .success()
        .stdout(predicate::str::contains("Video:"))
        .stdout(predicate::str::contains("Limits:"))
        .stdout(predicate::str::contains("mkv"));
}

#[test]
fn test_cli_validate_good_config() {
    let mut cmd = playcaps_cmd();
    cmd.arg("validate")
        .arg(fixture_path("chrome_desktop.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Video types: 8"));
}

#[test]
fn test_cli_validate_bad_config() {
    let mut cmd = playcaps_cmd();
    cmd.arg("validate")
        .arg(fixture_path("invalid_channels.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("allowed_audio_channels"));
}

#[test]
fn test_cli_validate_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[identity\nchrome = true").unwrap();

    let mut cmd = playcaps_cmd();
    cmd.arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_cli_missing_config_file() {
    let dir = tempdir().unwrap();
    let mut cmd = playcaps_cmd();
    cmd.arg("--config")
        .arg(dir.path().join("missing.toml"))
        .arg("profile")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config file"));
}
