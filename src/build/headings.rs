// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Heading extraction, anchor derivation and section excerpts.
//!
//! Only `##` and `###` headings become sections. The page title is the h1, and
//! anything deeper than h3 is too fine-grained to be worth a search hit.
//!
//! Anchors are derived from the visible heading text, so two headings with the
//! same text get the same anchor. Search deduplicates on `(slug, anchor)`, which
//! makes cross-page collisions harmless; same-page collisions are left as is.
//!
//! Excerpts are advisory. A repeated heading text reuses the first line that
//! matches it, so its excerpt may come from the earlier occurrence.

use crate::types::{ELLIPSIS, MAX_EXCERPT_CHARS};

/// Lines scanned after a heading when looking for its excerpt.
pub const EXCERPT_LOOKAHEAD: usize = 5;

/// A `##`/`###` heading found in a document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    /// Heading text with `*`, `_` and backtick markers removed.
    pub text: String,
    /// 2 or 3.
    pub level: u8,
    pub anchor: String,
}

/// Extract every level-2 and level-3 heading, in line order.
pub fn extract_headings(body: &str) -> Vec<Heading> {
    body.lines()
        .filter_map(|line| {
            let (level, rest) = split_heading(line)?;
            // Needs at least one whitespace and one more character of text
            if rest.chars().count() < 2 {
                return None;
            }
            let text = strip_inline_markup(rest).trim().to_string();
            let anchor = derive_anchor(&text);
            Some(Heading {
                text,
                level,
                anchor,
            })
        })
        .collect()
}

/// Derive the URL anchor for a heading.
///
/// Lowercase, strip inline markers, collapse every run of characters outside
/// `[a-z0-9]` into one `-`, then trim a leading and a trailing `-`.
///
/// ```
/// use docsift::derive_anchor;
///
/// assert_eq!(derive_anchor("Panel Families"), "panel-families");
/// assert_eq!(derive_anchor("`qs ipc` **call**"), "qs-ipc-call");
/// assert_eq!(derive_anchor("What's new?"), "what-s-new");
/// ```
pub fn derive_anchor(text: &str) -> String {
    let lowered = strip_inline_markup(text).to_lowercase();
    let mut anchor = String::with_capacity(lowered.len());
    let mut in_gap = false;

    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            anchor.push(c);
            in_gap = false;
        } else if !in_gap {
            anchor.push('-');
            in_gap = true;
        }
    }

    let anchor = anchor.strip_prefix('-').unwrap_or(&anchor);
    anchor.strip_suffix('-').unwrap_or(anchor).to_string()
}

/// Find the excerpt for a heading: the first content line after it.
///
/// The heading is located by its first textual match in the body. Up to
/// [`EXCERPT_LOOKAHEAD`] following lines are scanned; blank lines, headings,
/// code fences and table rows are skipped. Empty when nothing qualifies.
pub fn heading_excerpt(body: &str, heading: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let Some(idx) = lines
        .iter()
        .position(|line| strip_inline_markup(strip_heading_prefix(line)).trim() == heading)
    else {
        return String::new();
    };

    let end = (idx + 1 + EXCERPT_LOOKAHEAD).min(lines.len());
    lines[idx + 1..end]
        .iter()
        .map(|line| line.trim())
        .find(|line| {
            !line.is_empty()
                && !line.starts_with('#')
                && !line.starts_with("```")
                && !line.starts_with('|')
        })
        .map(truncate_excerpt)
        .unwrap_or_default()
}

/// Remove `*`, `_` and backtick markers.
pub fn strip_inline_markup(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '*' | '_' | '`'))
        .collect()
}

fn truncate_excerpt(line: &str) -> String {
    let mut excerpt: String = line
        .chars()
        .filter(|c| !matches!(c, '*' | '_' | '`' | '[' | ']'))
        .take(MAX_EXCERPT_CHARS)
        .collect();
    // Ellipsis tracks the raw line length, markers included
    if line.chars().count() > MAX_EXCERPT_CHARS {
        excerpt.push(ELLIPSIS);
    }
    excerpt
}

/// Split `## text` into `(2, " text")`. Requires 2-3 hashes then whitespace.
fn split_heading(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if !(2..=3).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if rest.starts_with(char::is_whitespace) {
        Some((hashes as u8, rest))
    } else {
        None
    }
}

fn strip_heading_prefix(line: &str) -> &str {
    match split_heading(line) {
        Some((_, rest)) => rest.trim_start(),
        None => line,
    }
}
