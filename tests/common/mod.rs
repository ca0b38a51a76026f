//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use docsift::{build_index, validate_index, IndexRecord, SectionRecord};
use tempfile::TempDir;

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{make_page, make_section, make_section_with_anchor, sample_index};

/// Docs directory of the fixture site.
pub const FIXTURES_DIR: &str = "data/fixtures/docs";

/// Documents in the fixture site.
pub const FIXTURE_PAGES: usize = 6;

/// `##`/`###` heading lines across the fixture site.
pub const FIXTURE_SECTIONS: usize = 15;

/// Build the fixture site.
pub fn fixture_index() -> Vec<IndexRecord> {
    build_index(Path::new(FIXTURES_DIR)).expect("fixture site should build")
}

/// Write `(file name, contents)` pairs into a fresh temporary docs directory.
pub fn write_docs(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (name, contents) in files {
        fs::write(dir.path().join(name), contents).expect("write doc");
    }
    dir
}

/// Section records owned by `slug`, in index order.
pub fn sections_of<'a>(records: &'a [IndexRecord], slug: &str) -> Vec<&'a SectionRecord> {
    records
        .iter()
        .filter_map(|r| match r {
            IndexRecord::Section(s) if s.slug == slug => Some(s),
            _ => None,
        })
        .collect()
}

/// Panic with every violation listed when the index breaks an invariant.
pub fn assert_index_well_formed(records: &[IndexRecord]) {
    if let Err(errors) = validate_index(records) {
        let listed: Vec<String> = errors.iter().map(ToString::to_string).collect();
        panic!("index is not well formed:\n  {}", listed.join("\n  "));
    }
}
