//! End-to-end tests for the `peripleo-when` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};

fn cmd() -> Command {
    Command::cargo_bin("peripleo-when").unwrap()
}

fn stdout_lines(output: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(output)
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn test_closed_range_argument() {
    let output = cmd().arg("100/200").assert().success().get_output().clone();
    assert_eq!(
        stdout_lines(&output.stdout),
        vec![json!({ "earliest": 100, "latest": 200, "label": "AD 100 - AD 200" })]
    );
}

#[test]
fn test_multiple_arguments_one_line_each() {
    let output = cmd()
        .args(["--", "-100/200", ">=50", "75", "0"])
        .assert()
        .success()
        .get_output()
        .clone();
    assert_eq!(
        stdout_lines(&output.stdout),
        vec![
            json!({ "earliest": -100, "latest": 200, "label": "100 BC - AD 200" }),
            json!({ "earliest": 50, "label": "after AD 50" }),
            json!({ "earliest": 75, "latest": 75, "year": 75, "label": "AD 75" }),
            Value::Null,
        ]
    );
}

#[test]
fn test_timespans_json_argument() {
    cmd()
        .arg("--label-only")
        .arg(r#"{"timespans":[{"start":{"in":-50},"end":{"in":100}}]}"#)
        .assert()
        .success()
        .stdout("50 BC - AD 100\n");
}

#[test]
fn test_common_era_flag() {
    cmd()
        .args(["--era", "common-era", "--label-only", "--", "-44"])
        .assert()
        .success()
        .stdout("44 BCE\n");
}

#[test]
fn test_label_only_without_label_prints_empty_line() {
    cmd()
        .args(["--label-only", "unknown"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_reads_stdin_when_no_arguments() {
    cmd()
        .arg("--label-only")
        .write_stdin("100/200\n\n>=-50\n75\n")
        .assert()
        .success()
        .stdout("AD 100 - AD 200\nafter 50 BC\nAD 75\n");
}

#[test]
fn test_pretty_output() {
    cmd()
        .args(["--pretty", "75"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"label\": \"AD 75\""));
}

#[test]
fn test_unsupported_json_fails() {
    cmd()
        .arg(r#"{"start":{"in":1}}"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: input #1"))
        .stderr(predicate::str::contains("object without 'timespans'"));
}

#[test]
fn test_invalid_era_rejected() {
    cmd()
        .args(["--era", "julian", "75"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'julian'"));
}

#[test]
fn test_flags_after_inputs_are_still_flags() {
    cmd()
        .args(["75", "--label-only", "-v"])
        .assert()
        .success()
        .stdout("AD 75\n");
}

#[test]
fn test_negative_year_without_separator() {
    cmd()
        .args(["--label-only", "-44", "100"])
        .assert()
        .success()
        .stdout("44 BC\nAD 100\n");
}

#[test]
fn test_hyphen_leading_range_needs_separator() {
    cmd()
        .args(["--label-only", "-100/200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    cmd()
        .args(["--label-only", "--", "-100/200"])
        .assert()
        .success()
        .stdout("100 BC - AD 200\n");
}

#[test]
fn test_label_only_conflicts_with_pretty() {
    cmd()
        .args(["--label-only", "--pretty", "75"])
        .assert()
        .failure();
}
