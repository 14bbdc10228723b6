//! Integration tests for the default rose chart command.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const REFERENCE: &str = "2024-05-01T07:00:00+00:00";

fn write_log(dir: &TempDir, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("birdnet.log");
    let mut file = std::fs::File::create(&path).expect("create log");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    path
}

#[test]
fn test_missing_log_file_fails() {
    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("--log").arg("/nonexistent/birdnet.log");
    cmd.arg("--no-publish");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read log file"));
}

#[test]
fn test_malformed_log_line_fails_with_line_number() {
    let dir = TempDir::new().expect("tempdir");
    let log = write_log(
        &dir,
        &[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5]]}"#,
            "not json at all",
        ],
    );

    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("--log").arg(&log).arg("--no-publish");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_renders_rose_chart() {
    let dir = TempDir::new().expect("tempdir");
    let log = write_log(
        &dir,
        &[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5],["corvus_crow",0.6]]}"#,
            r#"{"msg":"success","timestamp":"2024-05-01T06:45:00+00:00","results":[["turdus_robin",0.7]]}"#,
            r#"{"msg":"no detections","timestamp":"2024-05-01T06:46:00+00:00"}"#,
        ],
    );
    let output = dir.path().join("rose.png");

    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("--log")
        .arg(&log)
        .arg("--output")
        .arg(&output)
        .arg("--reference")
        .arg(REFERENCE)
        .arg("--no-publish");

    cmd.assert().success();
    assert!(output.exists());
    assert!(std::fs::metadata(&output).expect("metadata").len() > 0);
}

#[test]
fn test_renders_empty_window_without_error() {
    let dir = TempDir::new().expect("tempdir");
    // All detections hours before the reference window.
    let log = write_log(
        &dir,
        &[
            r#"{"msg":"success","timestamp":"2024-05-01T01:10:00+00:00","results":[["turdus_robin",0.5]]}"#,
        ],
    );
    let output = dir.path().join("rose.png");

    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("--log")
        .arg(&log)
        .arg("--output")
        .arg(&output)
        .arg("--reference")
        .arg(REFERENCE)
        .arg("--no-publish");

    cmd.assert().success();
    assert!(output.exists());
}

#[test]
fn test_publishes_to_dashboard_dir() {
    let dir = TempDir::new().expect("tempdir");
    let log = write_log(
        &dir,
        &[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5]]}"#,
        ],
    );
    let output = dir.path().join("rose.png");
    let dashboard = dir.path().join("www").join("birdnet");

    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("--log")
        .arg(&log)
        .arg("--output")
        .arg(&output)
        .arg("--reference")
        .arg(REFERENCE)
        .arg("--publish-dir")
        .arg(&dashboard);

    cmd.assert().success();
    assert!(dashboard.join("roseplot_by_minute.png").exists());
}
