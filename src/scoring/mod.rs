// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a single record earns its number.
//!
//! Each record produces at most one candidate. Pages score on the best field
//! that matched (title over description over body); sections score on their
//! heading, with `##` above `###`.
//!
//! | Match                        | Score |
//! |------------------------------|-------|
//! | Page title                   | 20    |
//! | Section heading, level 2     | 15    |
//! | Section heading, level 3     | 10    |
//! | Page description             | 8     |
//! | Page body                    | 3     |
//!
//! A title hit always outranks a same-page heading hit, and any heading hit
//! outranks a description or body hit.

use crate::types::{IndexRecord, PageRecord, SectionRecord};

pub const TITLE_SCORE: u32 = 20;
pub const DESCRIPTION_SCORE: u32 = 8;
pub const CONTENT_SCORE: u32 = 3;
pub const H2_SCORE: u32 = 15;
pub const H3_SCORE: u32 = 10;

/// Score a record against an already-lowercased query. `None` means no match.
pub fn score_record(record: &IndexRecord, query: &str) -> Option<u32> {
    match record {
        IndexRecord::Page(page) => score_page(page, query),
        IndexRecord::Section(section) => score_section(section, query),
    }
}

/// Title beats description beats body; only the best applies.
pub fn score_page(page: &PageRecord, query: &str) -> Option<u32> {
    if page.title.to_lowercase().contains(query) {
        Some(TITLE_SCORE)
    } else if page.description.to_lowercase().contains(query) {
        Some(DESCRIPTION_SCORE)
    } else if page.content.contains(query) {
        // Content is lowercased at build time
        Some(CONTENT_SCORE)
    } else {
        None
    }
}

pub fn score_section(section: &SectionRecord, query: &str) -> Option<u32> {
    if section.section.to_lowercase().contains(query) {
        Some(heading_score(section.level))
    } else {
        None
    }
}

/// Level 2 headings score higher; every other level scores as a subsection.
pub fn heading_score(level: u8) -> u32 {
    if level == 2 {
        H2_SCORE
    } else {
        H3_SCORE
    }
}
