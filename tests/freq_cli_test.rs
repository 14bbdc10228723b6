//! Integration tests for the freq subcommand.

use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn write_log(dir: &TempDir, lines: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("birdnet.log");
    let mut file = std::fs::File::create(&path).expect("create log");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    path
}

#[test]
fn test_freq_renders_bar_chart() {
    let dir = TempDir::new().expect("tempdir");
    let log = write_log(
        &dir,
        &[
            r#"{"msg":"success","timestamp":"2024-05-01T06:10:00+00:00","results":[["turdus_robin",0.5]]}"#,
            r#"{"msg":"success","timestamp":"2024-05-01T06:11:00+00:00","results":[["turdus_robin",0.5]]}"#,
            r#"{"msg":"success","timestamp":"2024-05-01T06:12:00+00:00","results":[["corvus_crow",0.6]]}"#,
        ],
    );
    let output = dir.path().join("freq.png");

    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("freq")
        .arg("--log")
        .arg(&log)
        .arg("--output")
        .arg(&output)
        .arg("-n")
        .arg("20");

    cmd.assert().success();
    assert!(output.exists());
    assert!(std::fs::metadata(&output).expect("metadata").len() > 0);
}

#[test]
fn test_freq_missing_log_fails() {
    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("freq").arg("--log").arg("/nonexistent/birdnet.log");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read log file"));
}

#[test]
fn test_config_path_prints_toml_path() {
    let mut cmd = cargo_bin_cmd!("birdrose");
    cmd.arg("config").arg("path");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
