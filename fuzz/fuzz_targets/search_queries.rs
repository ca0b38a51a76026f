#![no_main]

//! Fuzz target for search query handling.
//!
//! Emoji, combining marks, null bytes and very long inputs must never panic,
//! and every result set must respect the limit and dedup invariants.

use docsift::testing::sample_index;
use docsift::{search_input, IndexRecord, MAX_RESULTS};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::sync::OnceLock;

fuzz_target!(|query: &str| {
    static INDEX: OnceLock<Vec<IndexRecord>> = OnceLock::new();
    let index = INDEX.get_or_init(sample_index);

    let results = search_input(index, query);

    assert!(results.len() <= MAX_RESULTS);
    if query.chars().count() < 2 {
        assert!(results.is_empty());
    }

    let keys: HashSet<(&str, &str)> = results.iter().map(|r| r.dedup_key()).collect();
    assert_eq!(keys.len(), results.len());

    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
});
