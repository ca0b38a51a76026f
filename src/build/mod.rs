// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Index Builder: docs directory in, `search-index.json` out.
//!
//! Runs once per site build. Every document contributes a page record followed
//! by one section record per `##`/`###` heading. Any I/O failure is fatal and
//! bubbles up as a `String` for the CLI to report.

pub mod document;
pub mod frontmatter;
pub mod headings;
pub mod manifest;
pub mod parallel;

use std::fs;
use std::path::Path;

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{IndexRecord, PageRecord, SectionRecord, MAX_CONTENT_CHARS};
use crate::util::{compressed_size, format_bytes};

pub use document::*;
pub use frontmatter::*;
pub use headings::*;
pub use manifest::*;
pub use parallel::*;

/// Default output path, relative to the site root.
pub const DEFAULT_OUTPUT: &str = "public/search-index.json";

/// What a build produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub sections: usize,
    pub bytes: usize,
    pub compressed_bytes: usize,
}

impl BuildSummary {
    pub fn entries(&self) -> usize {
        self.pages + self.sections
    }
}

/// Create a progress style for the loading bar
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Turn loaded documents into index records, page then its sections.
pub fn build_records(docs: &[Document]) -> Vec<IndexRecord> {
    let mut records = Vec::new();

    for doc in docs {
        records.push(IndexRecord::Page(page_record(doc)));

        for heading in extract_headings(&doc.body) {
            let excerpt = heading_excerpt(&doc.body, &heading.text);
            records.push(IndexRecord::Section(SectionRecord {
                slug: doc.slug.clone(),
                title: doc.title.clone(),
                section: heading.text,
                section_anchor: heading.anchor,
                excerpt,
                level: heading.level,
            }));
        }
    }

    records
}

fn page_record(doc: &Document) -> PageRecord {
    PageRecord {
        slug: doc.slug.clone(),
        title: doc.title.clone(),
        description: doc.description.clone().unwrap_or_default(),
        content: doc
            .body
            .to_lowercase()
            .chars()
            .take(MAX_CONTENT_CHARS)
            .collect(),
    }
}

/// Load a docs directory and build its records.
pub fn build_index(docs_dir: &Path) -> Result<Vec<IndexRecord>, String> {
    let docs = load_documents(docs_dir)?;
    Ok(build_records(&docs))
}

/// Serialize records as the JSON array the site fetches.
pub fn encode_index(records: &[IndexRecord], pretty: bool) -> Result<String, String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(records)
    } else {
        serde_json::to_string(records)
    };
    encoded.map_err(|e| format!("Failed to serialize index: {}", e))
}

/// Build the index for `input_dir` and write it to `output`.
pub fn run_build(input_dir: &str, output: &str, pretty: bool) -> Result<BuildSummary, String> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output);

    // 1. Load documents
    #[cfg(feature = "parallel")]
    let docs = {
        let load_pb = ProgressBar::new(0);
        load_pb.set_style(create_progress_style());
        load_pb.set_prefix("Loading");
        load_pb.set_message("documents...");
        let docs = load_documents_with_progress(input_path, &load_pb)?;
        load_pb.finish_with_message(format!("loaded {} documents", docs.len()));
        docs
    };

    #[cfg(not(feature = "parallel"))]
    let docs = load_documents_with_progress(input_path)?;

    if docs.is_empty() {
        eprintln!(
            "⚠️  No documents found in {}; writing empty index",
            input_path.display()
        );
    }

    // Invalid manifest is fatal, unknown stems only warn
    if let Some(manifest) = DocsManifest::load(input_path)? {
        for stem in &manifest.order {
            if !docs.iter().any(|doc| &doc.stem == stem) {
                eprintln!("⚠️  {} lists '{}' but no such document exists", MANIFEST_FILE, stem);
            }
        }
    }

    // 2. Build records
    let records = build_records(&docs);
    let sections = records.iter().filter(|r| !r.is_page()).count();

    // 3. Write the artifact
    let encoded = encode_index(&records, pretty)?;
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create output dir: {}", e))?;
    }
    fs::write(output_path, &encoded)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    let summary = BuildSummary {
        pages: docs.len(),
        sections,
        bytes: encoded.len(),
        compressed_bytes: compressed_size(encoded.as_bytes()),
    };

    eprintln!("  ✓ {}", output_path.display());
    eprintln!();
    eprintln!("✅ Build complete");
    eprintln!(
        "   {} entries │ {} pages │ {} sections │ {} ({} brotli)",
        summary.entries(),
        summary.pages,
        summary.sections,
        format_bytes(summary.bytes),
        format_bytes(summary.compressed_bytes)
    );

    Ok(summary)
}
