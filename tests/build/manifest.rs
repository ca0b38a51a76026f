//! Manifest loading and reading order tests.

use crate::common::{write_docs, FIXTURES_DIR};
use docsift::build::{load_documents, DocsManifest};
use docsift::nav::{doc_navigation, reading_order};
use std::path::Path;

#[test]
fn test_fixture_manifest_order() {
    let manifest = DocsManifest::load(Path::new(FIXTURES_DIR)).unwrap().unwrap();
    assert_eq!(manifest.version, 1);
    assert_eq!(manifest.order.first().map(String::as_str), Some("index"));
    assert_eq!(manifest.order.len(), 6);
}

#[test]
fn test_missing_manifest_is_none() {
    let dir = write_docs(&[("guide.mdx", "# Guide")]);
    assert_eq!(DocsManifest::load(dir.path()).unwrap(), None);
}

#[test]
fn test_invalid_manifest_is_error() {
    let dir = write_docs(&[("manifest.json", "{\"order\": [")]);
    let err = DocsManifest::load(dir.path()).unwrap_err();
    assert!(err.contains("Invalid manifest JSON"), "{}", err);
}

#[test]
fn test_navigation_follows_manifest() {
    let dir = Path::new(FIXTURES_DIR);
    let docs = load_documents(dir).unwrap();
    let manifest = DocsManifest::load(dir).unwrap();
    let order = reading_order(manifest.as_ref(), &docs);

    let nav = doc_navigation(&order, &docs, "installation");
    assert_eq!(nav.prev.unwrap().href, "/docs");
    assert_eq!(nav.next.unwrap().title, "Configuration");

    let last = doc_navigation(&order, &docs, "ipc");
    assert_eq!(last.prev.unwrap().title, "Theming");
    assert!(last.next.is_none());
}
