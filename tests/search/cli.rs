//! `docsift search` run as a binary against the fixture index.

use crate::common::{write_docs, FIXTURES_DIR};
use docsift::build::run_build;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the docsift binary with the given arguments.
fn run_docsift(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_docsift"))
        .args(args)
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run docsift")
}

fn fixture_index_file(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("search-index.json");
    run_build(FIXTURES_DIR, path.to_str().unwrap(), false).expect("fixture build");
    path
}

fn json_results(output: &Output) -> Vec<serde_json::Value> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("bad JSON {:?}: {}", stdout, e))
}

#[test]
fn test_cli_short_query_prints_empty_json() {
    let dir = TempDir::new().unwrap();
    let index = fixture_index_file(&dir);

    let output = run_docsift(&["search", index.to_str().unwrap(), "k", "--json"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(json_results(&output).is_empty());
}

#[test]
fn test_cli_short_query_does_not_read_index() {
    let output = run_docsift(&["search", "does/not/exist.json", "k"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No results"), "stdout: {}", stdout);
}

#[test]
fn test_cli_search_json_has_hrefs() {
    let dir = TempDir::new().unwrap();
    let index = fixture_index_file(&dir);

    let output = run_docsift(&["search", index.to_str().unwrap(), "keybind", "--json"]);
    assert!(output.status.success());
    let results = json_results(&output);
    assert_eq!(results[0]["href"], "/docs/keybindings");
}

#[test]
fn test_cli_limit_is_capped() {
    let names: Vec<String> = (0..20).map(|i| format!("panel-{:02}.mdx", i)).collect();
    let bodies: Vec<String> = (0..20)
        .map(|i| format!("---\ntitle: Panel {}\n---\nText\n", i))
        .collect();
    let files: Vec<(&str, &str)> = names
        .iter()
        .zip(&bodies)
        .map(|(n, b)| (n.as_str(), b.as_str()))
        .collect();
    let docs = write_docs(&files);
    let out = TempDir::new().unwrap();
    let index = out.path().join("search-index.json");
    run_build(docs.path().to_str().unwrap(), index.to_str().unwrap(), false).unwrap();
    let index = index.to_str().unwrap();

    let output = run_docsift(&["search", index, "panel", "--json", "--limit", "50"]);
    assert!(output.status.success());
    assert_eq!(json_results(&output).len(), 12);

    let output = run_docsift(&["search", index, "panel", "--json", "--limit", "3"]);
    assert_eq!(json_results(&output).len(), 3);
}

#[test]
fn test_cli_missing_index_fails() {
    let output = run_docsift(&["search", "does/not/exist.json", "keybind"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("❌"));
}
