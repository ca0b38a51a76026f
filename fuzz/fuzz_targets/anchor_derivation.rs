#![no_main]

use docsift::build::derive_anchor;
use docsift::verify::is_valid_anchor;
use libfuzzer_sys::fuzz_target;

/// Fuzz target for heading anchor derivation.
///
/// Whatever the heading text, the anchor:
/// - contains only [a-z0-9-]
/// - has no leading, trailing or doubled hyphen
/// - is a fixed point of derivation
fuzz_target!(|text: &str| {
    let anchor = derive_anchor(text);

    assert!(is_valid_anchor(&anchor), "{:?} -> {:?}", text, anchor);
    assert_eq!(derive_anchor(&anchor), anchor);
});
