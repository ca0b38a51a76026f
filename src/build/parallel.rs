// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Document discovery and loading.
//!
//! Reading and front-matter parsing are independent per file, so with the
//! `parallel` feature they run on the rayon pool. Whatever order the pool
//! finishes in, the result is sorted by slug: the root document (empty slug)
//! first, then the rest alphabetically. That keeps the emitted index
//! byte-identical across builds of unchanged input.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

use super::document::{doc_stem, Document};

/// List document files in a directory (non-recursive), sorted by path.
pub fn discover_documents(docs_dir: &Path) -> Result<Vec<PathBuf>, String> {
    let entries = fs::read_dir(docs_dir).map_err(|e| {
        format!(
            "Failed to read docs directory {}: {}",
            docs_dir.display(),
            e
        )
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            format!(
                "Failed to read docs directory {}: {}",
                docs_dir.display(),
                e
            )
        })?;
        let path = entry.path();
        if path.is_file() && doc_stem(&path).is_some() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every document in the directory, sorted by slug.
pub fn load_documents(docs_dir: &Path) -> Result<Vec<Document>, String> {
    let paths = discover_documents(docs_dir)?;

    #[cfg(feature = "parallel")]
    let docs = paths
        .par_iter()
        .map(|path| Document::from_file(path))
        .collect::<Result<Vec<Document>, String>>()?;

    #[cfg(not(feature = "parallel"))]
    let docs = paths
        .iter()
        .map(|path| Document::from_file(path))
        .collect::<Result<Vec<Document>, String>>()?;

    sort_and_check(docs)
}

/// Load every document in the directory with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    docs_dir: &Path,
    progress: &ProgressBar,
) -> Result<Vec<Document>, String> {
    let paths = discover_documents(docs_dir)?;
    let total = paths.len();
    let counter = AtomicUsize::new(0);
    progress.set_length(total as u64);

    let docs = paths
        .par_iter()
        .map(|path| {
            let doc = Document::from_file(path)?;

            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count % 10 == 0 || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            Ok(doc)
        })
        .collect::<Result<Vec<Document>, String>>()?;

    sort_and_check(docs)
}

/// Non-parallel fallback (no progress).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(docs_dir: &Path) -> Result<Vec<Document>, String> {
    load_documents(docs_dir)
}

/// Sort by slug and reject two files claiming the same slug (`a.md` + `a.mdx`).
fn sort_and_check(mut docs: Vec<Document>) -> Result<Vec<Document>, String> {
    docs.sort_by(|a, b| a.slug.cmp(&b.slug));
    for pair in docs.windows(2) {
        if pair[0].slug == pair[1].slug {
            return Err(format!("Duplicate document slug '{}'", pair[0].stem));
        }
    }
    Ok(docs)
}
