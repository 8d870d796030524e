use std::{fs, process::Command};

use asserting::prelude::*;
use log_analyzer::{analyze_file, parse_log_line};

#[test]
fn generated_file_is_understood_by_the_analyzer() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("access.log");
    let status = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--lines", "500", "--seed", "3", "--malformed-ratio", "0.1"])
        .arg("--output")
        .arg(&path)
        .status()
        .expect("Failed to start noise-maker");
    assert_that!(status.success()).is_true();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_that!(lines.len()).is_equal_to(500);
    let accepted = lines.iter().filter(|l| parse_log_line(l).is_some()).count();
    assert_that!(accepted < 500).is_true();

    let summary = analyze_file(&path).unwrap();
    assert_that!(summary.total_requests).is_equal_to(accepted as u64);
    assert_that!(summary.status_counts.total()).is_equal_to(accepted as u64);
    assert_that!(summary.most_frequent_address_count > 0).is_true();
}

#[test]
fn writes_to_stdout_by_default() {
    let output = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--lines", "25", "--seed", "9"])
        .output()
        .expect("Failed to start noise-maker");
    assert_that!(output.status.success()).is_true();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_that!(stdout.lines().count()).is_equal_to(25);
    assert_that!(stdout.lines().all(|l| parse_log_line(l).is_some())).is_true();
}

#[test]
fn rejects_out_of_range_ratio() {
    let output = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--dash-ratio", "1.5"])
        .output()
        .expect("Failed to start noise-maker");
    assert_that!(output.status.success()).is_false();
}
