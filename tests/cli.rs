//! End-to-end tests for the dagpath binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn dagpath() -> Command {
    Command::cargo_bin("dagpath").unwrap()
}

fn write_records(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("records.json");
    fs::write(&path, json).unwrap();
    path
}

#[test]
fn test_paths_on_sample_dataset() {
    dagpath()
        .args(["--quiet", "paths"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "01. B000 → B001 → A003 → A004 → B005\n",
        ))
        .stdout(predicate::str::contains(
            "58. C001 → C002 → C003 → C004 → B005\n",
        ))
        .stdout(predicate::str::ends_with(
            "\nTotal: 58 paths  | sources: [B000, C001] | sinks: [B005]\n",
        ));
}

#[test]
fn test_paths_csv_summary() {
    let output = dagpath()
        .args(["-q", "paths", "--format", "csv", "--table", "summary"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "path_id,source,sink,length,path");
    assert_eq!(lines.len(), 1 + 58);
    assert_eq!(lines[1], "1,B000,B005,5,B000 → B001 → A003 → A004 → B005");
}

#[test]
fn test_paths_json_from_file() {
    let dir = TempDir::new().unwrap();
    let input = write_records(
        &dir,
        r#"[
            {"id": "left", "inputs": ["top"]},
            {"id": "right", "inputs": ["top"]},
            {"id": "bottom", "inputs": ["left", "right"]}
        ]"#,
    );

    let output = dagpath()
        .args(["-q", "paths", "--format", "json", "--input"])
        .arg(&input)
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["summary"]["paths"], 2);
    assert_eq!(parsed["paths"][1]["nodes"][1], "right");
}

#[test]
fn test_paths_writes_report_files() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");

    dagpath()
        .args(["-q", "paths", "--out-dir"])
        .arg(&out_dir)
        .assert()
        .success();

    let list = fs::read_to_string(out_dir.join("all_paths_list.txt")).unwrap();
    assert_eq!(list.lines().count(), 58);
    assert!(!list.ends_with('\n'));

    let steps = fs::read_to_string(out_dir.join("all_paths_steps.csv")).unwrap();
    assert!(steps.starts_with("path_id,step,node,source,sink\n1,1,B000,B000,B005\n"));

    let summary = fs::read_to_string(out_dir.join("all_paths_summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 1 + 58);
}

#[test]
fn test_cycle_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_records(
        &dir,
        r#"[{"id": "a", "inputs": ["b"]}, {"id": "b", "inputs": ["a"]}, {"id": "c", "inputs": []}]"#,
    );
    let out_dir = dir.path().join("out");

    dagpath()
        .args(["-q", "paths", "--input"])
        .arg(&input)
        .arg("--out-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Cycle detected"))
        .stderr(predicate::str::contains("a -> b -> a"));

    assert!(!out_dir.exists());
}

#[test]
fn test_unwritable_out_dir_prints_no_report() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    dagpath()
        .args(["-q", "paths", "--out-dir"])
        .arg(blocker.join("out"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to write reports"));
}

#[test]
fn test_cycle_error_names_real_edges() {
    let dir = TempDir::new().unwrap();
    let input = write_records(
        &dir,
        r#"[{"id": "c", "inputs": ["a"]}, {"id": "b", "inputs": ["c"]}, {"id": "a", "inputs": ["b"]}]"#,
    );

    dagpath()
        .args(["-q", "validate", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cycles: a -> c -> b -> a"));
}

#[test]
fn test_validate_sample() {
    dagpath()
        .args(["-q", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 14 nodes, 25 edges, acyclic"))
        .stdout(predicate::str::contains("sources: [B000, C001]"))
        .stdout(predicate::str::contains("sinks:   [B005]"));
}

#[test]
fn test_empty_input_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let input = write_records(&dir, "[]");

    dagpath()
        .args(["-q", "paths", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout("\n\nTotal: 0 paths  | sources: [] | sinks: []\n");
}

#[test]
fn test_missing_input_file() {
    dagpath()
        .args(["-q", "paths", "--input", "/no/such/file.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn test_invalid_format() {
    dagpath()
        .args(["paths", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown export format"));
}

#[test]
fn test_version() {
    dagpath()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("dagpath v"));
}
