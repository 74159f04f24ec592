//! Smoke tests for the keypad-calc binary
//!
//! Only headless paths are exercised here; the interactive keypad needs a
//! real terminal.

#![allow(deprecated)] // Command::cargo_bin
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn keypad_calc() -> Command {
    let mut cmd = Command::cargo_bin("keypad-calc").expect("keypad-calc binary should exist");
    cmd.env_remove("KEYPAD_CALC_CONFIG").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    keypad_calc()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    keypad_calc()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("press"))
        .stdout(predicate::str::contains("run"));
}

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_multiply() {
    keypad_calc()
        .args(["press", "7", "*", "6", "="])
        .assert()
        .success()
        .stdout("42.0\n");
}

#[test]
fn test_press_joined_labels() {
    keypad_calc()
        .args(["press", "12.5="])
        .assert()
        .success()
        .stdout("12.5\n");
}

#[test]
fn test_press_subtract() {
    keypad_calc()
        .args(["press", "3", "-", "8", "="])
        .assert()
        .success()
        .stdout("-5.0\n");
}

#[test]
fn test_press_divide_by_zero() {
    keypad_calc()
        .args(["press", "5", "/", "0", "="])
        .assert()
        .success()
        .stdout("inf\n");
}

#[test]
fn test_press_without_equals_shows_entry() {
    keypad_calc()
        .args(["press", "3", ".", "."])
        .assert()
        .success()
        .stdout("3.\n");
}

#[test]
fn test_press_unknown_label() {
    keypad_calc()
        .args(["press", "2", "^", "3"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid argument"))
        .stderr(predicate::str::contains("'^'"));
}

#[test]
fn test_press_requires_keys() {
    keypad_calc().arg("press").assert().failure();
}

#[test]
fn test_press_verbose_logs_to_stderr() {
    keypad_calc()
        .args(["-v", "press", "1+1="])
        .assert()
        .success()
        .stdout("2.0\n")
        .stderr(predicate::str::contains("pressing buttons"));
}

#[test]
fn test_press_log_file() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calc.log");
    keypad_calc()
        .args(["-vv", "--log-file"])
        .arg(&log)
        .args(["press", "4*4="])
        .assert()
        .success()
        .stdout("16.0\n")
        .stderr(predicate::str::is_empty());

    let content = fs::read_to_string(&log).unwrap();
    assert!(content.contains("pressing buttons"));
    assert!(content.contains("button pressed"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();
    keypad_calc()
        .arg("--config")
        .arg(dir.path().join("nope.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: I/O error"));
}

#[test]
fn test_invalid_config_color() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("view.json");
    fs::write(&path, r#"{ "digit_color": "chartreuse-ish" }"#).unwrap();
    keypad_calc()
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("digit_color"));
}

#[test]
fn test_unknown_config_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("view.json");
    fs::write(&path, r#"{ "font": "mono" }"#).unwrap();
    keypad_calc()
        .args(["run", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}
