//! Record construction tests.

use crate::common::{
    assert_index_well_formed, fixture_index, sections_of, write_docs, FIXTURE_PAGES,
    FIXTURE_SECTIONS,
};
use docsift::build::build_index;
use docsift::types::{IndexRecord, MAX_CONTENT_CHARS, MAX_EXCERPT_CHARS};

#[test]
fn test_fixture_record_counts() {
    let records = fixture_index();
    let pages = records.iter().filter(|r| r.is_page()).count();

    assert_eq!(pages, FIXTURE_PAGES);
    assert_eq!(records.len() - pages, FIXTURE_SECTIONS);
    assert_index_well_formed(&records);
}

#[test]
fn test_page_precedes_its_sections() {
    let records = fixture_index();
    assert!(records[0].is_page());
    assert_eq!(records[0].slug(), "");

    let mut current = None;
    for record in &records {
        match record {
            IndexRecord::Page(page) => current = Some(page.slug.clone()),
            IndexRecord::Section(section) => assert_eq!(Some(&section.slug), current.as_ref()),
        }
    }
}

#[test]
fn test_anchor_derivation_from_markup() {
    let records = fixture_index();
    let ipc = sections_of(&records, "ipc");

    assert_eq!(ipc[0].section, "qs ipc call");
    assert_eq!(ipc[0].section_anchor, "qs-ipc-call");
    assert_eq!(ipc[1].section_anchor, "targets");

    let theming = sections_of(&records, "theming");
    assert_eq!(theming[1].section_anchor, "what-s-new");
}

#[test]
fn test_heading_levels() {
    let records = fixture_index();
    let levels: Vec<(&str, u8)> = sections_of(&records, "configuration")
        .iter()
        .map(|s| (s.section.as_str(), s.level))
        .collect();
    assert_eq!(
        levels,
        vec![("Keybindings", 2), ("Bar modules", 2), ("clock module", 3)]
    );
}

#[test]
fn test_excerpts() {
    let records = fixture_index();
    let config = sections_of(&records, "configuration");
    assert_eq!(
        config[0].excerpt,
        "Shortcuts are declared by niri; see the keybindings page for the defaults."
    );
    // Backticks dropped from the excerpt too
    assert_eq!(config[1].excerpt, "Modules are listed left to right under bar.modules.");

    // Table rows are skipped and the prose is past the lookahead window
    let install = sections_of(&records, "installation");
    assert_eq!(install[1].section, "Optional packages");
    assert_eq!(install[1].excerpt, "");
}

#[test]
fn test_page_content_lowercased() {
    let records = fixture_index();
    match &records[0] {
        IndexRecord::Page(page) => {
            assert!(page.content.contains("nocturne is a desktop shell"));
            assert_eq!(page.description, "A Wayland desktop shell built on Quickshell");
        }
        _ => panic!("Expected Page variant"),
    }
}

#[test]
fn test_long_body_and_line_truncated() {
    let long_line = "word ".repeat(40);
    let body = format!(
        "---\ntitle: Big\n---\n## Section\n\n{}\n\n{}",
        long_line,
        "X".repeat(MAX_CONTENT_CHARS * 2)
    );
    let dir = write_docs(&[("big.mdx", body.as_str())]);
    let records = build_index(dir.path()).unwrap();

    match (&records[0], &records[1]) {
        (IndexRecord::Page(page), IndexRecord::Section(section)) => {
            assert_eq!(page.content.chars().count(), MAX_CONTENT_CHARS);
            assert_eq!(section.excerpt.chars().count(), MAX_EXCERPT_CHARS + 1);
            assert!(section.excerpt.ends_with('…'));
        }
        _ => panic!("Expected page then section"),
    }
    assert_index_well_formed(&records);
}

#[test]
fn test_crlf_documents() {
    let dir = write_docs(&[(
        "win.mdx",
        "---\r\ntitle: Windows\r\n---\r\n## Line endings\r\nCarriage returns are fine.\r\n",
    )]);
    let records = build_index(dir.path()).unwrap();

    assert_eq!(records[0].title(), "Windows");
    match &records[1] {
        IndexRecord::Section(section) => {
            assert_eq!(section.section_anchor, "line-endings");
            assert_eq!(section.excerpt, "Carriage returns are fine.");
        }
        _ => panic!("Expected Section variant"),
    }
}

#[test]
fn test_deep_and_shallow_headings_ignored() {
    let dir = write_docs(&[(
        "levels.mdx",
        "# Title\n## Kept\n### Also kept\n#### Too deep\n##NoSpace\n## x\n",
    )]);
    let records = build_index(dir.path()).unwrap();
    let sections = sections_of(&records, "levels");
    let names: Vec<&str> = sections.iter().map(|s| s.section.as_str()).collect();
    assert_eq!(names, vec!["Kept", "Also kept", "x"]);
}

#[test]
fn test_build_is_deterministic() {
    assert_eq!(fixture_index(), fixture_index());
}
