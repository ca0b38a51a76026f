// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Page-level navigation: hrefs, prev/next links, breadcrumbs, slug lookup.

use std::path::Path;

use serde::Serialize;

use crate::build::{stem_for_slug, Document, DocsManifest, DOC_EXTENSIONS};

/// Base path the docs are served under.
pub const DOCS_BASE: &str = "/docs";

/// Location of a document: `/docs` for the root, `/docs/{slug}` otherwise.
pub fn doc_href(slug: &str) -> String {
    if slug.is_empty() {
        DOCS_BASE.to_string()
    } else {
        format!("{}/{}", DOCS_BASE, slug)
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub title: String,
    pub href: String,
}

/// Previous/next links at the bottom of a page.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DocNavigation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<NavLink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<NavLink>,
}

/// Reading order as file stems: the manifest's `order`, or slug order.
pub fn reading_order(manifest: Option<&DocsManifest>, docs: &[Document]) -> Vec<String> {
    match manifest {
        Some(manifest) if !manifest.order.is_empty() => manifest.order.clone(),
        _ => docs.iter().map(|doc| doc.stem.clone()).collect(),
    }
}

/// Prev/next neighbours of `slug` in the reading order.
///
/// A slug missing from the order gets no links. A neighbour listed in the
/// order but absent from `docs` is skipped rather than replaced.
pub fn doc_navigation(order: &[String], docs: &[Document], slug: &str) -> DocNavigation {
    let stem = stem_for_slug(slug);
    let Some(idx) = order.iter().position(|s| s == stem) else {
        return DocNavigation::default();
    };

    let link = |i: usize| -> Option<NavLink> {
        let neighbour = order.get(i)?;
        let doc = docs.iter().find(|d| &d.stem == neighbour)?;
        Some(NavLink {
            title: doc.title.clone(),
            href: doc_href(&doc.slug),
        })
    };

    DocNavigation {
        prev: idx.checked_sub(1).and_then(&link),
        next: link(idx + 1),
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub href: String,
    pub label: String,
}

/// Breadcrumbs for a location path. None for `/` and `/docs`.
///
/// ```
/// use docsift::breadcrumbs;
///
/// let crumbs = breadcrumbs("/docs/panel-families");
/// assert_eq!(crumbs[1].href, "/docs/panel-families");
/// assert_eq!(crumbs[1].label, "Panel Families");
/// ```
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() || trimmed == DOCS_BASE {
        return Vec::new();
    }

    let segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
    (0..segments.len())
        .map(|i| Crumb {
            href: format!("/{}", segments[..=i].join("/")),
            label: segment_label(segments[i]),
        })
        .collect()
}

fn segment_label(segment: &str) -> String {
    segment
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Look a document up by slug. `None` is a not-found (404) outcome.
pub fn find_doc(docs_dir: &Path, slug: &str) -> Option<Document> {
    let stem = stem_for_slug(slug);
    if stem.contains(['/', '\\']) || stem.starts_with('.') {
        return None;
    }
    DOC_EXTENSIONS
        .iter()
        .map(|ext| docs_dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
        .and_then(|path| Document::from_file(&path).ok())
}
