// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Structural checks on a built (or fetched) index.
//!
//! The builder upholds these by construction. Checking them again catches a
//! hand-edited or stale `search-index.json` before it ships, and gives the
//! property tests one oracle to assert against.

use std::collections::HashSet;
use std::fmt;

use crate::types::{IndexRecord, ELLIPSIS, MAX_CONTENT_CHARS, MAX_EXCERPT_CHARS};

/// One invariant violation, tagged with the record position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexInvariantError {
    /// Two page records share a slug.
    DuplicatePage { position: usize, slug: String },
    /// Section record whose slug has no preceding page record.
    OrphanSection { position: usize, slug: String },
    /// Section level outside {2, 3}.
    InvalidLevel { position: usize, level: u8 },
    /// Anchor contains characters outside `[a-z0-9-]` or has edge hyphens.
    InvalidAnchor { position: usize, anchor: String },
    /// Page content not lowercased.
    ContentNotLowercase { position: usize },
    /// Page content longer than the cap.
    ContentTooLong { position: usize, chars: usize },
    /// Excerpt longer than the cap plus ellipsis.
    ExcerptTooLong { position: usize, chars: usize },
}

impl fmt::Display for IndexInvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexInvariantError::DuplicatePage { position, slug } => {
                write!(f, "record {}: duplicate page slug '{}'", position, slug)
            }
            IndexInvariantError::OrphanSection { position, slug } => {
                write!(f, "record {}: section has no page '{}'", position, slug)
            }
            IndexInvariantError::InvalidLevel { position, level } => {
                write!(f, "record {}: heading level {} not in 2..=3", position, level)
            }
            IndexInvariantError::InvalidAnchor { position, anchor } => {
                write!(f, "record {}: invalid anchor '{}'", position, anchor)
            }
            IndexInvariantError::ContentNotLowercase { position } => {
                write!(f, "record {}: page content is not lowercase", position)
            }
            IndexInvariantError::ContentTooLong { position, chars } => {
                write!(
                    f,
                    "record {}: content {} chars > {}",
                    position, chars, MAX_CONTENT_CHARS
                )
            }
            IndexInvariantError::ExcerptTooLong { position, chars } => {
                write!(
                    f,
                    "record {}: excerpt {} chars > {}",
                    position,
                    chars,
                    MAX_EXCERPT_CHARS + 1
                )
            }
        }
    }
}

impl std::error::Error for IndexInvariantError {}

/// Anchor shape: only `[a-z0-9-]`, no leading or trailing hyphen, no `--`.
///
/// The empty anchor (heading with no alphanumerics) is well-formed.
pub fn is_valid_anchor(anchor: &str) -> bool {
    anchor
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !anchor.starts_with('-')
        && !anchor.ends_with('-')
        && !anchor.contains("--")
}

/// Check every invariant, collecting all violations.
pub fn validate_index(records: &[IndexRecord]) -> Result<(), Vec<IndexInvariantError>> {
    let mut errors = Vec::new();
    let mut pages: HashSet<&str> = HashSet::new();

    for (position, record) in records.iter().enumerate() {
        match record {
            IndexRecord::Page(page) => {
                if !pages.insert(page.slug.as_str()) {
                    errors.push(IndexInvariantError::DuplicatePage {
                        position,
                        slug: page.slug.clone(),
                    });
                }
                if page.content != page.content.to_lowercase() {
                    errors.push(IndexInvariantError::ContentNotLowercase { position });
                }
                let chars = page.content.chars().count();
                if chars > MAX_CONTENT_CHARS {
                    errors.push(IndexInvariantError::ContentTooLong { position, chars });
                }
            }
            IndexRecord::Section(section) => {
                if !pages.contains(section.slug.as_str()) {
                    errors.push(IndexInvariantError::OrphanSection {
                        position,
                        slug: section.slug.clone(),
                    });
                }
                if !(2..=3).contains(&section.level) {
                    errors.push(IndexInvariantError::InvalidLevel {
                        position,
                        level: section.level,
                    });
                }
                if !is_valid_anchor(&section.section_anchor) {
                    errors.push(IndexInvariantError::InvalidAnchor {
                        position,
                        anchor: section.section_anchor.clone(),
                    });
                }
                let chars = section.excerpt.chars().count();
                let limit = if section.excerpt.ends_with(ELLIPSIS) {
                    MAX_EXCERPT_CHARS + 1
                } else {
                    MAX_EXCERPT_CHARS
                };
                if chars > limit {
                    errors.push(IndexInvariantError::ExcerptTooLong { position, chars });
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
