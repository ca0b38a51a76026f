#![no_main]

//! Fuzz target for index decoding.
//!
//! A fetched index is untrusted: decoding and validating arbitrary bytes must
//! fail cleanly, and the cache must degrade to empty results.

use docsift::search::{parse_index, IndexCache, StaticSource};
use docsift::verify::validate_index;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(records) = parse_index(json) {
        let _ = validate_index(&records);
    }

    let cache = IndexCache::new();
    let results = cache.search_input(&StaticSource::new(json), "ab");
    assert!(results.len() <= docsift::MAX_RESULTS);
});
