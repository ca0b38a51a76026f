// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

use super::frontmatter::parse_front_matter;

/// File extensions read from the docs directory.
pub const DOC_EXTENSIONS: &[&str] = &["mdx", "md"];

/// File stem of the root document, served at `/docs`.
pub const ROOT_STEM: &str = "index";

/// A documentation page read from disk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    /// Empty for the root document.
    pub slug: String,
    /// File stem the slug came from (`index` for the root).
    pub stem: String,
    pub title: String,
    pub description: Option<String>,
    /// Text after the front-matter block.
    pub body: String,
}

impl Document {
    /// Parse a document from its file stem and raw text.
    pub fn parse(stem: &str, raw: &str) -> Self {
        let (front, body) = parse_front_matter(raw);
        Document {
            slug: slug_for_stem(stem).to_string(),
            stem: stem.to_string(),
            title: front.title.unwrap_or_else(|| stem.to_string()),
            description: front.description,
            body: body.to_string(),
        }
    }

    /// Read and parse a document file.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let stem = doc_stem(path)
            .ok_or_else(|| format!("Not a document file: {}", path.display()))?;
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        Ok(Document::parse(stem, &raw))
    }
}

/// Map a file stem to its slug: `index` becomes the empty root slug.
pub fn slug_for_stem(stem: &str) -> &str {
    if stem == ROOT_STEM {
        ""
    } else {
        stem
    }
}

/// Map a slug back to its file stem.
pub fn stem_for_slug(slug: &str) -> &str {
    if slug.is_empty() {
        ROOT_STEM
    } else {
        slug
    }
}

/// Stem of a path when it has a document extension.
pub fn doc_stem(path: &Path) -> Option<&str> {
    let ext = path.extension()?.to_str()?;
    if !DOC_EXTENSIONS.contains(&ext) {
        return None;
    }
    path.file_stem()?.to_str()
}
