//! Document discovery and loading tests.

use crate::common::{write_docs, FIXTURES_DIR, FIXTURE_PAGES};
use docsift::build::{discover_documents, load_documents};
use std::path::Path;

#[test]
fn test_discover_skips_non_documents() {
    let dir = write_docs(&[
        ("guide.mdx", "# Guide"),
        ("notes.md", "# Notes"),
        ("manifest.json", "{}"),
        ("logo.svg", "<svg/>"),
    ]);

    let paths = discover_documents(dir.path()).unwrap();
    assert_eq!(paths.len(), 2);
}

#[test]
fn test_load_fixture_documents_sorted_by_slug() {
    let docs = load_documents(Path::new(FIXTURES_DIR)).unwrap();
    let slugs: Vec<&str> = docs.iter().map(|d| d.slug.as_str()).collect();

    assert_eq!(docs.len(), FIXTURE_PAGES);
    assert_eq!(
        slugs,
        vec!["", "configuration", "installation", "ipc", "keybindings", "theming"]
    );
}

#[test]
fn test_title_falls_back_to_stem() {
    let docs = load_documents(Path::new(FIXTURES_DIR)).unwrap();
    let ipc = docs.iter().find(|d| d.slug == "ipc").unwrap();
    assert_eq!(ipc.title, "ipc");
    assert_eq!(ipc.description, None);
}

#[test]
fn test_quoted_front_matter_values() {
    let docs = load_documents(Path::new(FIXTURES_DIR)).unwrap();
    let install = docs.iter().find(|d| d.slug == "installation").unwrap();
    assert_eq!(
        install.description.as_deref(),
        Some("Installing the shell and its dependencies")
    );

    let theming = docs.iter().find(|d| d.slug == "theming").unwrap();
    assert_eq!(theming.title, "Theming");
}

#[test]
fn test_duplicate_slug_is_error() {
    let dir = write_docs(&[("faq.md", "# FAQ"), ("faq.mdx", "# FAQ")]);
    let err = load_documents(dir.path()).unwrap_err();
    assert!(err.contains("Duplicate document slug"), "{}", err);
}

#[test]
fn test_missing_directory_is_error() {
    let err = load_documents(Path::new("/nonexistent/docs")).unwrap_err();
    assert!(err.contains("Failed to read docs directory"), "{}", err);
}
