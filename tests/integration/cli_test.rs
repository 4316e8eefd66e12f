//! Integration tests for the convert command (CLI)

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{load_fixture, temp_fixture};

fn rulemt() -> Command {
    let mut cmd = Command::cargo_bin("rulemt").expect("binary should build");
    cmd.env_remove("RUST_LOG")
        .env_remove("RUST_BACKTRACE")
        .env_remove("RUST_LIB_BACKTRACE");
    cmd
}

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn convert_help_shows_usage() {
    rulemt()
        .args(["convert", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<INPUT>"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--keep-experimental"));
}

#[test]
fn convert_without_output_is_usage_error() {
    rulemt()
        .args(["convert", "rules.cinc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--output"));
}

// ============================================================================
// Conversion Tests
// ============================================================================

#[test]
fn convert_writes_output_and_prints_symbols() {
    let (temp_dir, input) = temp_fixture("integrity_configlist.cinc");
    let output = temp_dir.path().join("vnext_rules.py");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout("is_spam,\nis_public_post,\nis_low_quality,\n")
        .stderr(predicate::str::contains("Migrated 4 rule(s), skipped 1"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(written, load_fixture("integrity_rules_expected.py"));
}

#[test]
fn convert_writes_symbols_to_file() {
    let (temp_dir, input) = temp_fixture("integrity_configlist.cinc");
    let output = temp_dir.path().join("out.py");
    let symbols = temp_dir.path().join("symbols.txt");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--symbols")
        .arg(&symbols)
        .assert()
        .success()
        .stdout("");

    let listed = std::fs::read_to_string(&symbols).unwrap();
    assert_eq!(listed.lines().count(), 3);
}

#[test]
fn keep_experimental_migrates_every_record() {
    let (temp_dir, input) = temp_fixture("integrity_configlist.cinc");
    let output = temp_dir.path().join("out.py");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--keep-experimental")
        .assert()
        .success()
        .stdout(predicate::str::contains("is_clickbait,"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("name=\"wpr_clickbait_exp\","));
    assert_eq!(written.matches("RuleInfo(").count(), 5);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn malformed_record_aborts_without_output() {
    let (temp_dir, input) = temp_fixture("missing_rule_name.cinc");
    let output = temp_dir.path().join("out.py");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to migrate"))
        .stderr(predicate::str::contains("Tag: ruleName=\" not found!"));

    assert!(!output.exists(), "no output should be written on failure");
}

#[test]
fn malformed_record_leaves_no_symbols_file() {
    let (temp_dir, input) = temp_fixture("missing_rule_name.cinc");
    let output = temp_dir.path().join("out.py");
    let symbols = temp_dir.path().join("symbols.txt");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .arg("--symbols")
        .arg(&symbols)
        .assert()
        .code(1)
        .stdout("");

    assert!(!symbols.exists(), "no symbols file should be written on failure");
    assert!(!output.exists());
}

#[test]
fn missing_input_file_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("out.py");

    rulemt()
        .args(["convert", "/nonexistent/rules.cinc", "-o"])
        .arg(&output)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read /nonexistent/rules.cinc"));
}

#[test]
fn empty_sentinel_override_is_rejected() {
    let (temp_dir, input) = temp_fixture("integrity_configlist.cinc");
    let output = temp_dir.path().join("out.py");

    rulemt()
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .args(["--sentinel", ""])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("sentinel cannot be empty"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_show_prints_effective_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[naming]\nnamespace_prefix = \"ig_\"\n").unwrap();

    rulemt()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace_prefix = \"ig_\""))
        .stdout(predicate::str::contains("sentinel = \"QuarkWprConfig(\""));
}

#[test]
fn config_file_changes_namespace_prefix() {
    let (temp_dir, input) = temp_fixture("integrity_configlist.cinc");
    let output = temp_dir.path().join("out.py");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, "[naming]\nnamespace_prefix = \"ig_\"\n").unwrap();

    rulemt()
        .arg("--config")
        .arg(&config_path)
        .arg("convert")
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.contains("name=\"ig_spam\","));
}
