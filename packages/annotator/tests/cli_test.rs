//! Command-line tests for the `structura` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn structura() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_structura"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_outline() {
    structura()
        .arg("outline")
        .arg(fixture("manual.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Structura Manual"))
        .stdout(predicate::str::contains("1 Introduction [intro]"))
        .stdout(predicate::str::contains("2.1 Installing [installing]"))
        .stdout(predicate::str::contains("3 Reference"));
}

#[test]
fn test_outline_with_parts() {
    structura()
        .arg("outline")
        .arg(fixture("book.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Basics [basics]"))
        .stdout(predicate::str::contains("1.2.1 Numbers"))
        .stdout(predicate::str::contains("2.1 Registries"));
}

#[test]
fn test_formals_by_kind() {
    structura()
        .args(["formals", "--kind", "figure"])
        .arg(fixture("manual.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1.1 Architecture [fig-architecture]"))
        .stdout(predicate::str::contains("2.1.1 Install steps"))
        .stdout(predicate::str::contains("Options").not());
}

#[test]
fn test_formals_all_kinds() {
    structura()
        .arg("formals")
        .arg(fixture("manual.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("figure"))
        .stdout(predicate::str::contains("table"))
        .stdout(predicate::str::contains("1.2 Options"));
}

#[test]
fn test_footnotes() {
    structura()
        .arg("footnotes")
        .arg(fixture("manual.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] Inner note"))
        .stdout(predicate::str::contains("[1] Outer note [0]"))
        .stdout(predicate::str::contains("[2] Requires a recent toolchain."));
}

#[test]
fn test_lookup() {
    structura()
        .arg("lookup")
        .arg(fixture("manual.yaml"))
        .arg("installing")
        .assert()
        .success()
        .stdout(predicate::str::contains("subsection 2.1 Installing"));
}

#[test]
fn test_lookup_unknown_identifier() {
    structura()
        .arg("lookup")
        .arg(fixture("manual.yaml"))
        .arg("nowhere")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Unknown identifier: 'nowhere'"));
}

#[test]
fn test_navigate_default_segment() {
    structura()
        .arg("navigate")
        .arg(fixture("manual.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1 Introduction"))
        .stdout(predicate::str::contains("next     2 Usage"))
        .stdout(predicate::str::contains("previous -"))
        .stdout(predicate::str::contains("up       -"));
}

#[test]
fn test_navigate_with_parts() {
    structura()
        .arg("navigate")
        .arg(fixture("book.yaml"))
        .arg("1.2")
        .assert()
        .success()
        .stdout(predicate::str::contains("previous 1.1 Getting started"))
        .stdout(predicate::str::contains("next     2 Advanced"))
        .stdout(predicate::str::contains("up       1 Basics"));
}

#[test]
fn test_navigate_invalid_segment() {
    structura()
        .arg("navigate")
        .arg(fixture("manual.yaml"))
        .arg("9")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid segment: '9'"));
}

#[test]
fn test_duplicate_identifier_fails() {
    structura()
        .arg("outline")
        .arg(fixture("duplicate.yaml"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Duplicate identifier 'shared'"));
}

#[test]
fn test_report_yaml_to_stdout() {
    structura()
        .arg("report")
        .arg(fixture("book.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("---\n"))
        .stdout(predicate::str::contains("title: Structura Book"))
        .stdout(predicate::str::contains("element: part"));
}

#[test]
fn test_report_json_to_file() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("report.json");

    structura()
        .arg("report")
        .arg(fixture("manual.yaml"))
        .args(["--format", "json", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved to:"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["title"], "Structura Manual");
    assert_eq!(report["footnotes"].as_array().map(Vec::len), Some(3));
    assert_eq!(report["formal_items"]["figure"][1]["number"], "2.1.1");
}

#[test]
fn test_missing_file() {
    structura()
        .arg("outline")
        .arg(fixture("missing.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}
