// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data types for the search index.
//!
//! The index is a flat JSON array of [`IndexRecord`]s. Pages and sections share
//! the array: each page record is followed by the section records of its `##`
//! and `###` headings. The wire format is fixed by the static site that fetches
//! `/search-index.json`, so field names stay camelCase.
//!
//! | Rust type       | JSON `type` | Purpose                             |
//! |-----------------|-------------|-------------------------------------|
//! | `PageRecord`    | `"page"`    | Title/description/body matching     |
//! | `SectionRecord` | `"section"` | Heading matching and deep links     |
//! | `SearchResult`  | -           | Ranked, deduplicated query output   |

use serde::{Deserialize, Serialize};

use crate::nav::doc_href;

/// Maximum characters of lowercased body text kept per page record.
pub const MAX_CONTENT_CHARS: usize = 8000;

/// Maximum characters of an excerpt before the ellipsis marker.
pub const MAX_EXCERPT_CHARS: usize = 110;

/// Marker appended to excerpts cut at [`MAX_EXCERPT_CHARS`].
pub const ELLIPSIS: char = '…';

/// One entry of the search index.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IndexRecord {
    Page(PageRecord),
    Section(SectionRecord),
}

impl IndexRecord {
    /// Slug of the page that owns this record.
    pub fn slug(&self) -> &str {
        match self {
            IndexRecord::Page(page) => &page.slug,
            IndexRecord::Section(section) => &section.slug,
        }
    }

    /// Title of the owning page.
    pub fn title(&self) -> &str {
        match self {
            IndexRecord::Page(page) => &page.title,
            IndexRecord::Section(section) => &section.title,
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, IndexRecord::Page(_))
    }
}

/// Page-level record: one per document.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PageRecord {
    /// Document slug. Empty string is the root (`index`) document.
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Lowercased body text, truncated to [`MAX_CONTENT_CHARS`].
    #[serde(default)]
    pub content: String,
}

/// Section-level record: one per `##`/`###` heading.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    /// Slug of the owning page.
    pub slug: String,
    /// Title of the owning page.
    pub title: String,
    /// Heading text with inline markup stripped.
    pub section: String,
    pub section_anchor: String,
    #[serde(default)]
    pub excerpt: String,
    /// Heading level: 2 or 3.
    pub level: u8,
}

/// Whether a result points at a whole page or one of its headings.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Page,
    Section,
}

impl ResultKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultKind::Page => "page",
            ResultKind::Section => "section",
        }
    }
}

/// A ranked query result.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    /// Title of the owning page.
    pub title: String,
    pub slug: String,
    /// Page description for page hits, heading excerpt for section hits.
    pub excerpt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_anchor: Option<String>,
    pub score: u32,
}

impl SearchResult {
    /// Navigation target: `/docs/{slug}`, plus `#{anchor}` for section hits.
    ///
    /// An empty anchor links to the page itself.
    pub fn href(&self) -> String {
        let base = doc_href(&self.slug);
        match self.section_anchor.as_deref() {
            Some(anchor) if !anchor.is_empty() => format!("{}#{}", base, anchor),
            _ => base,
        }
    }

    /// Deduplication key: `(slug, anchor-or-empty)`.
    pub fn dedup_key(&self) -> (&str, &str) {
        (
            self.slug.as_str(),
            self.section_anchor.as_deref().unwrap_or(""),
        )
    }

    /// Main label shown for the result: heading text for sections, page title otherwise.
    pub fn label(&self) -> &str {
        self.section.as_deref().unwrap_or(&self.title)
    }
}
