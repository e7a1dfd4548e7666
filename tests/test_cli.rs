//! Tests for CLI argument parsing and the end-to-end binary

#[path = "common/mod.rs"]
mod common;

use std::path::PathBuf;

use assert_cmd::Command;
use clap::Parser;
use infocontent::cli::Cli;
use infocontent::pipeline::FailurePolicy;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["infocontent", "-i", "classes"]);

    assert_eq!(cli.objects, 800, "Default object count should be 800");
    assert_eq!(cli.start, 0, "Default start index should be 0");
    assert_eq!(cli.bins, 10, "Default gradation count should be 10");
    assert_eq!(cli.base_class, 2, "Default base class should be 2");
    assert_eq!(cli.precision, 6, "Default precision should be 6 digits");
    assert!(cli.features.is_none());
    assert!(!cli.skip_failed);
    assert!(!cli.zip);
    assert!(!cli.no_confirm);
}

#[test]
fn test_cli_custom_values() {
    let cli = Cli::parse_from([
        "infocontent",
        "-i",
        "classes",
        "--features",
        "3",
        "--objects",
        "100",
        "--start",
        "10",
        "--bins",
        "5",
        "--base-class",
        "0",
        "--precision",
        "12",
        "--skip-failed",
    ]);

    let config = cli.analysis_config().unwrap();
    assert_eq!(cli.features, Some(3));
    assert_eq!(config.object_count, 100);
    assert_eq!(config.start_index, 10);
    assert_eq!(config.bins, 5);
    assert_eq!(config.base_class, 0);
    assert_eq!(config.precision.digits(), 12);
    assert_eq!(config.failure_policy, FailurePolicy::Skip);
}

#[test]
fn test_cli_output_dir_derivation() {
    let cli = Cli::parse_from(["infocontent", "-i", "/path/to/classes"]);
    assert_eq!(cli.output_dir(), PathBuf::from("/path/to/classes_report"));

    let cli = Cli::parse_from(["infocontent", "-i", "/path/to/classes", "-o", "/tmp/out"]);
    assert_eq!(cli.output_dir(), PathBuf::from("/tmp/out"));
}

#[test]
fn test_cli_rejects_zero_bins() {
    let result = Cli::try_parse_from(["infocontent", "-i", "classes", "--bins", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_out_of_range_precision() {
    assert!(Cli::try_parse_from(["infocontent", "-i", "classes", "--precision", "0"]).is_err());
    assert!(Cli::try_parse_from(["infocontent", "-i", "classes", "--precision", "101"]).is_err());
    assert!(Cli::try_parse_from(["infocontent", "-i", "classes", "--precision", "100"]).is_ok());
}

#[test]
fn test_cli_rejects_empty_object_window() {
    let cli = Cli::parse_from(["infocontent", "-i", "classes", "--objects", "5", "--start", "5"]);
    assert!(cli.analysis_config().is_err());
}

#[test]
fn test_cli_requires_input() {
    assert!(Cli::try_parse_from(["infocontent"]).is_err());
}

#[test]
fn test_binary_writes_reports() {
    let classes = common::create_class_directory();
    let output = TempDir::new().unwrap();

    Command::cargo_bin("infocontent")
        .unwrap()
        .arg("-i")
        .arg(classes.path())
        .arg("-o")
        .arg(output.path())
        .arg("--no-confirm")
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP 3"));

    let report = std::fs::read_to_string(output.path().join("report.txt")).unwrap();
    assert!(report.starts_with(&format!(
        "Report on parse of:\t{}",
        classes.path().display()
    )));

    for name in [
        "report.txt",
        "result_shannon.csv",
        "result_shannon_pairs.csv",
        "result_kullback.csv",
        "result_accum.csv",
        "analysis.json",
    ] {
        assert!(output.path().join(name).exists(), "{} was not written", name);
    }
}

#[test]
fn test_binary_zip_bundle() {
    let classes = common::create_class_directory();
    let output = TempDir::new().unwrap();

    Command::cargo_bin("infocontent")
        .unwrap()
        .arg("-i")
        .arg(classes.path())
        .arg("-o")
        .arg(output.path())
        .arg("--no-confirm")
        .arg("--zip")
        .assert()
        .success();

    assert!(output.path().join("infocontent_report.zip").exists());
    assert!(!output.path().join("report.txt").exists());
}

#[test]
fn test_binary_fails_on_missing_base_class() {
    let classes = common::create_class_directory();
    let output = TempDir::new().unwrap();

    Command::cargo_bin("infocontent")
        .unwrap()
        .arg("-i")
        .arg(classes.path())
        .arg("-o")
        .arg(output.path())
        .arg("--base-class")
        .arg("3")
        .arg("--no-confirm")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base class 3 does not exist"));
}
