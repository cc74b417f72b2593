//! End-to-end tests for the audit-ledger binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn audit_ledger() -> Command {
    Command::cargo_bin("audit-ledger").unwrap()
}

#[test]
fn checklist_lists_all_ten_entries() {
    audit_ledger()
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::contains("Statement of Applicability"))
        .stdout(predicate::str::contains("Organization Chart"));
}

#[test]
fn checklist_json_output_is_parseable() {
    let output = audit_ledger()
        .args(["checklist", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(entries.as_array().unwrap().len(), 10);
}

#[test]
fn requirements_lists_clause_references() {
    audit_ledger()
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clause 4.3"))
        .stdout(predicate::str::contains("Control A.8.27*"));
}

#[test]
fn analyze_reports_partial_documentation() {
    audit_ledger()
        .args(["analyze", "risk register 2024.pdf", "unrelated.pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documentation Pending"))
        .stdout(predicate::str::contains("unrelated.pdf"));
}

#[test]
fn analyze_rejects_unknown_audit_type() {
    audit_ledger()
        .args(["analyze", "--audit-type", "external", "anything.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("audit-type"));
}

#[test]
fn export_prints_csv_to_stdout() {
    audit_ledger()
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Clause Number,Requirement,Category,Status,Documents Referenced,Confidence,Non-Conformities",
        ))
        .stdout(predicate::str::contains("\"4.1\""));
}

#[test]
fn export_nonconformity_filter_narrows_rows() {
    let output = audit_ledger()
        .args(["export", "--status", "Nonconformity"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.trim_end().split('\n').collect();
    // Header plus exactly one matching clause
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("\"4.2\""));
    assert!(lines[1].ends_with("\"1\""));
}

#[test]
fn export_writes_file_into_directory() {
    let dir = tempfile::tempdir().unwrap();

    audit_ledger()
        .args(["export", "--kind", "annex-a"])
        .args(["--output", dir.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("iso-annex-a-assessment-"));

    let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(entries.len(), 1);
}

#[test]
fn export_rejects_unknown_kind() {
    audit_ledger()
        .args(["export", "--kind", "controls"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("kind"));
}
