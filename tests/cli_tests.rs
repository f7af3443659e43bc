use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn write_captures(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

/// --dry-run should load the file, report the count, and exit 0.
#[test]
fn test_dry_run_counts_captures() {
    let file = write_captures(
        r#"[
            {"url": "https://x.com/api/users/1", "body": "user_id: 1"},
            {"url": "https://x.com/api/users/2", "body": "user_id: 2"}
        ]"#,
    );

    cargo_bin_cmd!("accessdiff")
        .args(&[file.path().to_str().unwrap(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY RUN] Would analyze 2 capture(s)"));
}

/// A batch with sequential ids and cross-account data should raise both
/// finding kinds and write them as JSON lines.
#[test]
fn test_full_analysis_reports_findings() {
    let file = write_captures(
        r#"[
            {"url": "https://x.com/api/users/10", "body": "user_id: 10 name: Alice", "identity": "alice"},
            {"url": "https://x.com/api/users/11", "body": "user_id: 11 name: Bob", "identity": "bob"},
            {"url": "https://x.com/api/users/12", "body": "user_id: 12 name: Carol", "identity": "alice"},
            {"url": "https://x.com/api/users/13", "body": "user_id: 13 name: Dave", "identity": "bob"}
        ]"#,
    );
    let dir = tempdir().unwrap();
    let output = dir.path().join("findings.json");

    cargo_bin_cmd!("accessdiff")
        .args(&[
            file.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sequential ID pattern detected"))
        .stdout(predicate::str::contains("IDOR"))
        .stdout(predicate::str::contains("Cross-Account Exposure"))
        .stdout(predicate::str::contains("finding(s) discovered"));

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.lines().count() >= 2);
    for line in written.lines() {
        let value: serde_json::Value = serde_json::from_str(line).unwrap();
        assert!(value.get("finding_type").is_some());
        assert!(value.get("evidence").is_some());
    }
}

/// Identical captures for the same identity carry no cross-account signal.
#[test]
fn test_clean_batch_reports_nothing() {
    let file = write_captures(
        r#"[
            {"url": "https://x.com/api/profile", "body": "user_id: 7"},
            {"url": "https://x.com/api/profile", "body": "user_id: 7"}
        ]"#,
    );
    let dir = tempdir().unwrap();
    let output = dir.path().join("findings.json");

    cargo_bin_cmd!("accessdiff")
        .args(&[
            file.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[+] No access-control findings."));
}

/// Framework flag should surface framework-specific remediation guidance.
#[test]
fn test_framework_overlay_in_remediation() {
    let file = write_captures(
        r#"[
            {"url": "https://x.com/api/users/10", "body": "user_id: 10"},
            {"url": "https://x.com/api/users/11", "body": "user_id: 11"},
            {"url": "https://x.com/api/users/12", "body": "user_id: 12"},
            {"url": "https://x.com/api/users/13", "body": "user_id: 13"}
        ]"#,
    );
    let dir = tempdir().unwrap();
    let output = dir.path().join("findings.json");

    cargo_bin_cmd!("accessdiff")
        .args(&[
            file.path().to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "--framework",
            "laravel",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gate::allows()"));
}

/// A missing capture file should fail with a readable error.
#[test]
fn test_missing_file_fails() {
    cargo_bin_cmd!("accessdiff")
        .args(&["no_such_file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

/// Malformed JSON should fail without panicking.
#[test]
fn test_invalid_json_fails() {
    let file = write_captures("this is not json");

    cargo_bin_cmd!("accessdiff")
        .args(&[file.path().to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array"));
}

/// Running with no arguments should fail (clap requires the capture file).
#[test]
fn test_no_args_shows_error() {
    cargo_bin_cmd!("accessdiff").assert().failure();
}
