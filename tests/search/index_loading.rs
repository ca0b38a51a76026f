//! Loading a built index from disk through the cache.

use crate::common::FIXTURES_DIR;
use docsift::build::run_build;
use docsift::search::{CacheStatus, LoadError};
use docsift::{FileSource, IndexCache};
use std::fs;
use tempfile::TempDir;

fn built_index(dir: &TempDir) -> FileSource {
    let path = dir.path().join("search-index.json");
    run_build(FIXTURES_DIR, path.to_str().unwrap(), false).unwrap();
    FileSource::new(path)
}

#[test]
fn test_load_built_index() {
    let dir = TempDir::new().unwrap();
    let source = built_index(&dir);
    let cache = IndexCache::new();

    let results = cache.search_input(&source, "wallpaper");
    assert!(!results.is_empty());
    assert_eq!(results[0].href(), "/docs/theming#wallpaper-colors");
    assert_eq!(cache.status(), CacheStatus::Loaded { records: 21 });
}

#[test]
fn test_index_read_once() {
    let dir = TempDir::new().unwrap();
    let source = built_index(&dir);
    let cache = IndexCache::new();

    assert!(!cache.search_input(&source, "ipc").is_empty());
    // Removing the file does not matter once loaded
    fs::remove_file(&source.path).unwrap();
    assert!(!cache.search_input(&source, "ipc").is_empty());
}

#[test]
fn test_truncated_index_soft_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    fs::write(&path, "[{\"type\":\"page\",\"slug\":").unwrap();
    let cache = IndexCache::new();
    let source = FileSource::new(&path);

    assert!(cache.search_input(&source, "ipc").is_empty());
    assert!(matches!(cache.get_or_load(&source), Err(LoadError::Malformed { .. })));
}

#[test]
fn test_unknown_record_type_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    fs::write(&path, r#"[{"type":"chapter","slug":"x","title":"X"}]"#).unwrap();
    let cache = IndexCache::new();

    let err = cache.get_or_load(&FileSource::new(&path)).unwrap_err();
    assert!(err.to_string().starts_with("malformed index"), "{}", err);
}

#[test]
fn test_reset_then_reload_after_fix() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("search-index.json");
    let source = FileSource::new(&path);
    let cache = IndexCache::new();

    assert!(cache.search_input(&source, "ipc").is_empty());
    assert!(matches!(cache.status(), CacheStatus::Failed(LoadError::Unavailable { .. })));

    run_build(FIXTURES_DIR, path.to_str().unwrap(), false).unwrap();
    // Still failed until reset
    assert!(cache.search_input(&source, "ipc").is_empty());
    cache.reset();
    assert!(!cache.search_input(&source, "ipc").is_empty());
}
