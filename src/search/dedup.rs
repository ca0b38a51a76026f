// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Result deduplication keyed on `(slug, anchor)`.
//!
//! A page hit and a section hit on the same page are different destinations
//! and both survive. Two section records with the same slug and anchor (a
//! heading text repeated within one page) land on the same URL and collapse.
//! A section whose anchor is empty links to the page itself, so it collapses
//! with the page hit.
//!
//! Candidates must be offered in rank order: the first offer for a key wins.

use std::collections::HashSet;

use crate::types::SearchResult;

/// Order-preserving merger that keeps the first result per destination.
pub struct ResultMerger {
    seen: HashSet<(String, String)>,
    results: Vec<SearchResult>,
    limit: usize,
}

impl ResultMerger {
    /// Create a merger that stops accepting after `limit` unique results.
    pub fn new(limit: usize) -> Self {
        Self {
            seen: HashSet::new(),
            results: Vec::with_capacity(limit.min(64)),
            limit,
        }
    }

    /// Offer the next-best result. Returns `true` when it was kept.
    pub fn offer(&mut self, result: SearchResult) -> bool {
        if self.is_full() {
            return false;
        }
        let (slug, anchor) = result.dedup_key();
        if !self.seen.insert((slug.to_string(), anchor.to_string())) {
            return false;
        }
        self.results.push(result);
        true
    }

    /// Offer results in order until the merger is full.
    pub fn merge_all(&mut self, results: impl IntoIterator<Item = SearchResult>) {
        for result in results {
            if self.is_full() {
                break;
            }
            self.offer(result);
        }
    }

    pub fn is_full(&self) -> bool {
        self.results.len() >= self.limit
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Kept results, in the order they were offered.
    pub fn into_results(self) -> Vec<SearchResult> {
        self.results
    }
}
