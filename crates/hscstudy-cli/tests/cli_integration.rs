//! CLI Integration Tests
//!
//! These tests verify the CLI commands work correctly end-to-end.
//! They test the "wiring" between the CLI and the core library.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// ============================================================================
// Test Utilities
// ============================================================================

const DATASET: &str = r#"{
  "poetry": [
    {
      "title": "Ozymandias",
      "author": "Percy Bysshe Shelley",
      "summary": "A sonnet on the decay of power",
      "keyPoints": ["Irony", "Hubris", "Time", "Art outlasts power", "Sonnet form", "Framed narrative"],
      "mcqs": [
        { "question": "Who wrote it?", "options": ["Keats", "Shelley", "Byron", "Blake"], "correct": 1 }
      ]
    },
    { "title": "The Raven" }
  ],
  "novel": [
    { "title": "Frankenstein", "summary": "Creation and responsibility" }
  ]
}"#;

/// Create a CLI command with a temporary data directory
fn cli_cmd(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("hscstudy").expect("Failed to find hscstudy binary");
    cmd.arg("--data-dir").arg(data_dir.path());
    cmd
}

/// Write the sample dataset into the temp dir and return its path
fn write_dataset(data_dir: &TempDir) -> PathBuf {
    let path = data_dir.path().join("content.json");
    std::fs::write(&path, DATASET).unwrap();
    path
}

/// CLI command with the sample dataset loaded
fn dataset_cmd(data_dir: &TempDir) -> Command {
    let dataset = write_dataset(data_dir);
    let mut cmd = cli_cmd(data_dir);
    cmd.arg("--dataset").arg(dataset);
    cmd
}

// ============================================================================
// Info Command Tests
// ============================================================================

#[test]
fn test_info_command() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("HSC Study"))
        .stdout(predicate::str::contains("Poetry: 2 items"))
        .stdout(predicate::str::contains("Total: 3 items, 36 questions, 48 flashcards"))
        .stdout(predicate::str::contains("Dark mode: off"));
}

#[test]
fn test_info_without_dataset_uses_empty_sections() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty default)"))
        .stdout(predicate::str::contains("Prose: 0 items"))
        .stdout(predicate::str::contains("Data directory:"));
}

#[test]
fn test_unparseable_dataset_fails() {
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    cli_cmd(&data_dir)
        .arg("--dataset")
        .arg(&path)
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization"));
}

#[test]
fn test_malformed_items_degrade_to_empty() {
    let data_dir = TempDir::new().unwrap();
    let path = data_dir.path().join("sparse.json");
    std::fs::write(
        &path,
        r#"{
          "poetry": [
            { "title": "Ozymandias", "mcqs": [{ "question": "q", "options": ["a", "b", "c"], "correct": 0 }] },
            { "title": "Broken", "keyPoints": null, "mcqs": null }
          ],
          "novel": null
        }"#,
    )
    .unwrap();

    cli_cmd(&data_dir)
        .arg("--dataset")
        .arg(&path)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Poetry: 2 items"));

    cli_cmd(&data_dir)
        .arg("--dataset")
        .arg(&path)
        .args(["show", "poetry", "1", "mindmap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Key concepts: "));

    cli_cmd(&data_dir)
        .arg("--dataset")
        .arg(&path)
        .args(["quiz", "poetry", "0", "--answer", "1=0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 1/12"));
}

// ============================================================================
// Enrich Command Tests
// ============================================================================

#[test]
fn test_enrich_to_file() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("enriched.json");

    dataset_cmd(&data_dir)
        .args(["enrich", "-o"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enriched dataset written"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    let ozymandias = &json["poetry"][0];
    assert_eq!(ozymandias["mcqs"].as_array().unwrap().len(), 12);
    assert_eq!(ozymandias["flashcards"].as_array().unwrap().len(), 16);
    assert_eq!(ozymandias["mcqs"][0]["question"], "Who wrote it?");
    assert_eq!(ozymandias["mcqs"][1]["question"], "Concept check 2 for Ozymandias?");
    assert_eq!(ozymandias["keyPoints"][0], "Irony");
    assert!(json.get("prose").is_none());
}

#[test]
fn test_enrich_to_stdout() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .arg("enrich")
        .assert()
        .success()
        .stdout(predicate::str::contains("The Raven: Key idea 16"));
}

// ============================================================================
// Show Command Tests
// ============================================================================

#[test]
fn test_show_summary() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "poetry", "0", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ozymandias"))
        .stdout(predicate::str::contains("By: Percy Bysshe Shelley"))
        .stdout(predicate::str::contains("A sonnet on the decay of power"));
}

#[test]
fn test_show_summary_placeholder() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "poetry", "1", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary coming soon."));
}

#[test]
fn test_show_mindmap_limits_concepts() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "poetry", "0", "mindmap"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Key concepts: Irony, Hubris, Time, Art outlasts power, Sonnet form",
        ))
        .stdout(predicate::str::contains("Framed narrative").not());
}

#[test]
fn test_show_quiz_labels() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "Poetry", "0", "mcq"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ozymandias - Practice Quiz"))
        .stdout(predicate::str::contains("Q1: Who wrote it?"))
        .stdout(predicate::str::contains("Q12: Concept check 12 for Ozymandias?"));
}

#[test]
fn test_show_out_of_range_is_noop() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "prose", "0", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No content at prose/0"));
}

#[test]
fn test_show_unknown_section_fails() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["show", "drama", "0", "summary"])
        .assert()
        .failure();
}

// ============================================================================
// Quiz Command Tests
// ============================================================================

#[test]
fn test_quiz_scores_answers() {
    let data_dir = TempDir::new().unwrap();

    // Q1 authored (correct 1); synthetic Q2..Q4 answer with index i mod 4
    dataset_cmd(&data_dir)
        .args(["quiz", "poetry", "0"])
        .args(["--answer", "1=1", "--answer", "2=1", "--answer", "3=0", "--answer", "4=3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 3/12"));
}

#[test]
fn test_quiz_reselect_uses_latest_answer() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["quiz", "poetry", "0", "-a", "1=1", "-a", "1=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/12"));
}

#[test]
fn test_quiz_without_answers() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["quiz", "novel", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Score: 0/12"));
}

#[test]
fn test_quiz_out_of_range_is_noop() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["quiz", "novel", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No content at novel/5"));
}

#[test]
fn test_quiz_invalid_answer_fails() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["quiz", "poetry", "0", "--answer", "first"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("first"));
}

// ============================================================================
// Search Command Tests
// ============================================================================

#[test]
fn test_search_matches_title_and_summary() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["search", "  RAVEN "])
        .assert()
        .success()
        .stdout(predicate::str::contains("poetry/1: The Raven"));

    dataset_cmd(&data_dir)
        .args(["search", "responsibility"])
        .assert()
        .success()
        .stdout(predicate::str::contains("novel/0: Frankenstein"));
}

#[test]
fn test_search_no_matches() {
    let data_dir = TempDir::new().unwrap();

    dataset_cmd(&data_dir)
        .args(["search", "hamlet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No matches"));
}

// ============================================================================
// Dark Mode Command Tests
// ============================================================================

#[test]
fn test_dark_mode_defaults_off() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["dark-mode", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode: off"));
}

#[test]
fn test_dark_mode_toggle_persists() {
    let data_dir = TempDir::new().unwrap();

    cli_cmd(&data_dir)
        .args(["dark-mode", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode: on"));

    cli_cmd(&data_dir)
        .args(["dark-mode", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode: on"));

    cli_cmd(&data_dir)
        .args(["dark-mode", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dark mode: off"));
}
