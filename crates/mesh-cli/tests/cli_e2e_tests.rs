//! End-to-end tests for the mesh binary
//!
//! These tests run the compiled CLI against small term and result files:
//! - Tree projection and top-level ordering
//! - Result filtering flags
//! - Table and JSON output
//! - Lookups by tree number, name and compound annotation
//! - Error handling

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

const TERMS: &str = "\
Chemicals\tD02\tOrganic chemicals
Aspirin\tD02.241.223;D27.505.696\tAnalgesic and antipyretic
Caffeine\tD02.241.511\tCNS stimulant
Ethanol\tC01.100\tSolvent
";

const RESULTS: &str = "\
Aspirin\t12\t40\t0.001\t3.5
Caffeine\t6\t30\t0.2\t1.2
Ethanol\t0\t10\t0.5\t0.0
Unknown\t8\t9\t0.0001\t9.0
";

fn fixture(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn mesh(terms: &NamedTempFile) -> Command {
    let mut cmd = Command::cargo_bin("mesh").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("MESH_TERMS_FILE")
        .env_remove("MESH_MAX_PVALUE")
        .env_remove("MESH_MIN_COUNT")
        .arg("--terms")
        .arg(terms.path());
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

// ============================================================================
// Tree Tests
// ============================================================================

#[test]
fn test_tree_default_filter() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    mesh(&terms)
        .arg("tree")
        .arg("--results")
        .arg(results.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Aspirin [D27.505.696]"))
        .stdout(predicate::str::contains("Aspirin [D02.241.223]"))
        .stdout(predicate::str::contains("Caffeine").not())
        .stdout(predicate::str::contains("Unknown").not());
}

#[test]
fn test_tree_all_reverses_top_level() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    let text = stdout_of(
        mesh(&terms)
            .arg("tree")
            .arg("--all")
            .arg("--results")
            .arg(results.path()),
    );
    let top: Vec<&str> = text.lines().filter(|l| !l.starts_with(' ')).collect();
    assert_eq!(top, ["D27 [D27]", "Chemicals [D02]"]);
    assert!(text.contains("Caffeine [D02.241.511]"));
    assert!(!text.contains("Ethanol"));
}

#[test]
fn test_tree_json() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    let text = stdout_of(
        mesh(&terms)
            .args(["--format", "json", "tree", "--max-p-value", "0.01", "--results"])
            .arg(results.path()),
    );
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let top = json["children"].as_array().unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0]["path"], "D27");
    assert_eq!(top[0]["placeholder"], true);
    assert_eq!(top[1]["label"], "Chemicals");
    let leaf = &top[0]["children"][0]["children"][0];
    assert_eq!(leaf["label"], "Aspirin");
    assert_eq!(leaf["payload"]["query_mapped"], 12);
}

#[test]
fn test_tree_nothing_enriched() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    mesh(&terms)
        .args(["tree", "--max-p-value", "0.00001", "--results"])
        .arg(results.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No enriched terms to show."));
}

// ============================================================================
// Table Tests
// ============================================================================

#[test]
fn test_table_text() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    mesh(&terms)
        .args(["table", "--min-count", "1", "--max-p-value", "0.5", "--results"])
        .arg(results.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Num. query"))
        .stdout(predicate::str::contains("Aspirin"))
        .stdout(predicate::str::contains("Caffeine"))
        .stdout(predicate::str::contains("2 terms"));
}

#[test]
fn test_table_json_one_row_per_result() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    let text = stdout_of(
        mesh(&terms)
            .args(["--format", "json", "table", "--all", "--results"])
            .arg(results.path()),
    );
    let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
    let names: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["term"]["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["Aspirin", "Caffeine"]);
}

#[test]
fn test_all_conflicts_with_thresholds() {
    let terms = fixture(TERMS);
    let results = fixture(RESULTS);

    mesh(&terms)
        .args(["table", "--all", "--min-count", "2", "--results"])
        .arg(results.path())
        .assert()
        .failure();
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_resolve_path() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .args(["resolve", "D02.241.511"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Caffeine"))
        .stdout(predicate::str::contains("CNS stimulant"));
}

#[test]
fn test_resolve_unregistered_path() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .args(["resolve", "D02.241"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No term at tree number 'D02.241'"));
}

#[test]
fn test_resolve_malformed_path() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .args(["resolve", "D02..241"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed path identifier"));
}

#[test]
fn test_term_lists_every_path() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .args(["term", "Aspirin"])
        .assert()
        .success()
        .stdout(predicate::str::contains("D02.241.223"))
        .stdout(predicate::str::contains("D27.505.696"));

    mesh(&terms)
        .args(["term", "aspirin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown term: 'aspirin'"));
}

#[test]
fn test_hierarchy_depth() {
    let terms = fixture(TERMS);

    let text = stdout_of(mesh(&terms).args(["hierarchy", "--depth", "1"]));
    assert_eq!(text, "D02 Chemicals\nD27\nC01\n");
}

#[test]
fn test_hierarchy_depth_applies_to_json() {
    let terms = fixture(TERMS);

    let text = stdout_of(mesh(&terms).args(["--format", "json", "hierarchy", "--depth", "1"]));
    let json: serde_json::Value = serde_json::from_str(&text).unwrap();
    let top = json["branches"].as_array().unwrap();
    assert_eq!(top.len(), 3);
    assert!(top
        .iter()
        .all(|b| b["branches"].as_array().unwrap().is_empty()));
    assert_eq!(top[0]["terms"][0]["name"], "Chemicals");
}

#[test]
fn test_annotate_selected_compounds() {
    let terms = fixture(TERMS);
    let annotations = fixture("2244;Aspirin\n2519;Caffeine\n999;Unlisted\n");

    mesh(&terms)
        .arg("annotate")
        .arg("--annotations")
        .arg(annotations.path())
        .arg("2244")
        .assert()
        .success()
        .stdout(predicate::str::contains("D02.241.223, D27.505.696"))
        .stdout(predicate::str::contains("Caffeine").not());

    let text = stdout_of(
        mesh(&terms)
            .args(["--format", "json", "annotate", "--annotations"])
            .arg(annotations.path()),
    );
    let rows: serde_json::Value = serde_json::from_str(&text).unwrap();
    let cids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["cid"].as_str().unwrap())
        .collect();
    assert_eq!(cids, ["2244", "2519"]);
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_malformed_term_file_aborts() {
    let terms = fixture("Good\tA.1\tok\nBad\tB..2\tbroken\n");

    mesh(&terms)
        .args(["resolve", "A.1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'B..2' on term 'Bad'"));
}

#[test]
fn test_missing_results_file() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .args(["tree", "--results", "/no/such/results.tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found: '/no/such/results.tsv'"));
}

#[test]
fn test_config_get_from_env() {
    let terms = fixture(TERMS);

    mesh(&terms)
        .env("MESH_MIN_COUNT", "7")
        .args(["config", "get", "min_count"])
        .assert()
        .success()
        .stdout("7\n");
}
