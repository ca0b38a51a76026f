// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Query Engine: substring matching, ranking, dedup, truncation.
//!
//! The whole index is resident (tens of pages, a few hundred sections), so a
//! linear scan per keystroke is fine. The pipeline is:
//!
//! 1. Score every record against the lowercased query (one candidate each).
//! 2. Order by `(Reverse(score), index position)`. The position makes the
//!    order total, so ties resolve the same way on every platform.
//! 3. Keep the first candidate per `(slug, anchor)` up to the limit.

use std::cmp::Reverse;

use super::dedup::ResultMerger;
use crate::scoring::score_record;
use crate::types::{IndexRecord, ResultKind, SearchResult};

/// Maximum results returned for one query.
pub const MAX_RESULTS: usize = 12;

/// Queries shorter than this (in characters) do not search from the input box.
pub const MIN_QUERY_LEN: usize = 2;

struct Candidate<'a> {
    position: usize,
    score: u32,
    record: &'a IndexRecord,
}

/// Search the index, returning at most [`MAX_RESULTS`] ranked results.
///
/// The scorer itself has no minimum length: an empty query is a substring of
/// everything. Use [`search_input`] for the gated, user-facing path.
pub fn search(index: &[IndexRecord], query: &str) -> Vec<SearchResult> {
    search_with_limit(index, query, MAX_RESULTS)
}

/// Search with a caller-chosen result limit.
pub fn search_with_limit(index: &[IndexRecord], query: &str, limit: usize) -> Vec<SearchResult> {
    let query = query.to_lowercase();

    let mut candidates: Vec<Candidate<'_>> = index
        .iter()
        .enumerate()
        .filter_map(|(position, record)| {
            score_record(record, &query).map(|score| Candidate {
                position,
                score,
                record,
            })
        })
        .collect();

    candidates.sort_unstable_by_key(|c| (Reverse(c.score), c.position));

    let mut merger = ResultMerger::new(limit);
    merger.merge_all(
        candidates
            .into_iter()
            .map(|c| to_result(c.record, c.score)),
    );
    merger.into_results()
}

/// User-facing search: inputs under [`MIN_QUERY_LEN`] characters yield nothing.
pub fn search_input(index: &[IndexRecord], input: &str) -> Vec<SearchResult> {
    if !is_searchable(input) {
        return Vec::new();
    }
    search(index, input)
}

/// Whether an input is long enough to trigger a search.
pub fn is_searchable(input: &str) -> bool {
    input.chars().count() >= MIN_QUERY_LEN
}

fn to_result(record: &IndexRecord, score: u32) -> SearchResult {
    match record {
        IndexRecord::Page(page) => SearchResult {
            kind: ResultKind::Page,
            title: page.title.clone(),
            slug: page.slug.clone(),
            excerpt: page.description.clone(),
            section: None,
            section_anchor: None,
            score,
        },
        IndexRecord::Section(section) => SearchResult {
            kind: ResultKind::Section,
            title: section.title.clone(),
            slug: section.slug.clone(),
            excerpt: section.excerpt.clone(),
            section: Some(section.section.clone()),
            section_anchor: Some(section.section_anchor.clone()),
            score,
        },
    }
}
