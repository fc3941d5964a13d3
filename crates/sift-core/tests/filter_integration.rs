// SPDX-License-Identifier: Apache-2.0

//! Integration tests for SARIF filtering using fixture files.
//!
//! These tests run the file-level entry points against scanner output
//! written to a temporary directory and inspect the written documents.

use std::path::{Path, PathBuf};

use serde_json::Value;
use sift_core::{
    FilterConfig, ReportConfig, SiftError, filter_sarif_file, summarize_sarif_file,
    write_summary_report,
};
use tempfile::TempDir;

/// Test fixture: a `CodeQL` run with findings in main, test and generated code.
const CODEQL_FIXTURE: &str = include_str!("../../../tests/sarif_fixtures/codeql.sarif");

/// Test fixture: a `semgrep` run with results of unexpected shape.
const MALFORMED_FIXTURE: &str = include_str!("../../../tests/sarif_fixtures/malformed.sarif");

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write fixture");
    path
}

fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).expect("read output");
    serde_json::from_str(&text).expect("output is json")
}

fn filter_fixture(contents: &str, patterns: &str) -> (sift_core::FilterStats, Value) {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", contents);
    let output = dir.path().join("output.sarif");
    let config = FilterConfig {
        patterns: patterns.to_string(),
        ..FilterConfig::default()
    };

    let stats = filter_sarif_file(&input, &output, &config).expect("filter should succeed");
    (stats, read_json(&output))
}

fn uris(result: &Value) -> Vec<&str> {
    result["locations"]
        .as_array()
        .expect("locations")
        .iter()
        .filter_map(|location| location["physicalLocation"]["artifactLocation"]["uri"].as_str())
        .collect()
}

#[test]
fn test_test_code_suppressed_except_sql_injection() {
    let (stats, sarif) = filter_fixture(
        CODEQL_FIXTURE,
        "-**/test/** +**/test/**:java/sql-injection",
    );

    let results = sarif["runs"][0]["results"].as_array().expect("results");
    assert_eq!(results.len(), 5);
    assert_eq!(uris(&results[1]), vec!["src/test/java/com/acme/UserDaoTest.java"]);
    assert_eq!(uris(&results[2]), vec!["src/main/java/com/acme/Page.java"]);

    assert_eq!(stats.results_before, 5);
    assert_eq!(stats.results_after, 5);
    assert_eq!(stats.locations_before, 5);
    assert_eq!(stats.locations_removed, 1);
}

#[test]
fn test_generated_code_result_removed() {
    let (stats, sarif) = filter_fixture(CODEQL_FIXTURE, "-src/generated/**");

    let results = sarif["runs"][0]["results"].as_array().expect("results");
    assert_eq!(results.len(), 4);
    assert!(
        results
            .iter()
            .all(|result| result["ruleId"] != "java/weak-cryptographic-algorithm")
    );
    assert_eq!(stats.results_removed(), 1);
}

#[test]
fn test_exclude_everything_keeps_locationless_result() {
    let (stats, sarif) = filter_fixture(CODEQL_FIXTURE, "-**");

    let results = sarif["runs"][0]["results"].as_array().expect("results");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["message"]["text"], "Reported without a location.");
    assert_eq!(stats.locations_removed, 5);
    assert_eq!(stats.results_removed(), 4);
}

#[test]
fn test_unknown_fields_and_key_order_survive() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", CODEQL_FIXTURE);
    let output = dir.path().join("output.sarif");

    filter_sarif_file(&input, &output, &FilterConfig::default()).expect("filter");

    let text = std::fs::read_to_string(&output).expect("read output");
    assert!(text.starts_with("{\n    \"$schema\""));
    assert!(text.ends_with("}\n"));

    let original: Value = serde_json::from_str(CODEQL_FIXTURE).expect("fixture is json");
    assert_eq!(read_json(&output), original);
}

#[test]
fn test_configured_indent_is_used() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", r#"{"runs":[]}"#);
    let output = dir.path().join("output.sarif");
    let config = FilterConfig {
        indent: 2,
        ..FilterConfig::default()
    };

    filter_sarif_file(&input, &output, &config).expect("filter");

    let text = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(text, "{\n  \"runs\": []\n}\n");
}

#[test]
fn test_malformed_entries_are_preserved() {
    let (stats, sarif) = filter_fixture(MALFORMED_FIXTURE, "-vendor/**");

    let results = sarif["runs"][0]["results"].as_array().expect("results");
    assert_eq!(results.len(), 3);
    assert_eq!(results[0], "unexpected string");
    assert_eq!(results[1]["locations"].as_array().map(Vec::len), Some(1));
    assert_eq!(uris(&results[2]), vec!["vendor/lib/other.py"]);

    assert_eq!(stats.malformed_entries, 3);
    assert_eq!(stats.locations_before, 2);
    assert_eq!(stats.locations_removed, 1);
}

#[test]
fn test_invalid_json_input() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", "{ \"runs\": [");
    let output = dir.path().join("output.sarif");

    let err = filter_sarif_file(&input, &output, &FilterConfig::default()).unwrap_err();

    assert!(matches!(err, SiftError::ParseSarif { .. }));
    assert!(!output.exists());
}

#[test]
fn test_invalid_glob_rejected_before_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", CODEQL_FIXTURE);
    let output = dir.path().join("output.sarif");
    let config = FilterConfig {
        patterns: "-src/**.java".to_string(),
        ..FilterConfig::default()
    };

    let err = filter_sarif_file(&input, &output, &config).unwrap_err();

    assert!(matches!(err, SiftError::InvalidGlob { .. }));
    assert!(!output.exists());
}

#[test]
fn test_summary_of_fixture() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", CODEQL_FIXTURE);

    let summary = summarize_sarif_file(&input, &ReportConfig::default()).expect("summary");

    assert_eq!(summary.tool_name, "CodeQL");
    assert_eq!(summary.total, 5);
    assert_eq!(summary.by_rule[0].rule_id, "java/sql-injection");
    assert_eq!(summary.by_rule[0].total, 2);
    assert_eq!(summary.by_rule[1].rule_id, "java/xss");
    assert_eq!(summary.by_level.get("error"), Some(&2));
    assert_eq!(summary.by_level.get("note"), Some(&1));
}

#[test]
fn test_summary_report_written_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = write_fixture(&dir, "input.sarif", MALFORMED_FIXTURE);
    let report = dir.path().join("summary.json");

    let summary = summarize_sarif_file(&input, &ReportConfig::default()).expect("summary");
    write_summary_report(&report, &summary, 4).expect("write report");

    let json = read_json(&report);
    assert_eq!(json["tool_name"], "semgrep");
    assert_eq!(json["total"], 2);
    assert_eq!(json["by_level"]["warning"], 2);
}
