#![no_main]

//! Fuzz target for front-matter and heading extraction.
//!
//! The fuzzer generates a document as front-matter values plus a list of
//! `(level, heading, prose)` lines. Every `##`/`###` line with text must become
//! exactly one section, nothing else may, and the records must pass index
//! validation.

use arbitrary::Arbitrary;
use docsift::build::{build_records, Document};
use docsift::verify::validate_index;
use docsift::IndexRecord;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DocInput {
    title: Option<String>,
    description: Option<String>,
    lines: Vec<(u8, String, String)>,
}

/// Keep generated text on one line.
fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

impl DocInput {
    fn render(&self) -> (String, usize) {
        let mut raw = String::new();
        if self.title.is_some() || self.description.is_some() {
            raw.push_str("---\n");
            if let Some(title) = &self.title {
                raw.push_str(&format!("title: {}\n", single_line(title)));
            }
            if let Some(description) = &self.description {
                raw.push_str(&format!("description: {}\n", single_line(description)));
            }
            raw.push_str("---\n");
        }

        let mut expected = 0;
        for (level, heading, prose) in &self.lines {
            let hashes = (*level % 4) as usize + 1;
            let heading = single_line(heading);
            if (2..=3).contains(&hashes) && !heading.is_empty() {
                expected += 1;
            }
            raw.push_str(&format!("{} {}\n", "#".repeat(hashes), heading));
            // Prefixed so prose can never read as a heading or a delimiter
            raw.push_str(&format!("text {}\n", single_line(prose)));
        }
        (raw, expected)
    }
}

fuzz_target!(|input: DocInput| {
    let (raw, expected) = input.render();
    let doc = Document::parse("fuzzed", &raw);
    assert!(doc.body.len() <= raw.len());

    let records = build_records(std::slice::from_ref(&doc));
    let sections = records.iter().filter(|r| !matches!(r, IndexRecord::Page(_))).count();
    assert_eq!(sections, expected, "section count for {:?}", raw);

    if let Err(errors) = validate_index(&records) {
        panic!("invalid records for {:?}: {:?}", raw, errors);
    }
});
