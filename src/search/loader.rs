// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! Lazily loaded index handle.
//!
//! The index is fetched on the first real search, not at startup, and then
//! kept for the lifetime of the handle. The fetch is attempted at most once:
//! a failure is remembered too, and every later search through the handle
//! quietly returns no results. [`IndexCache::reset`] forgets everything,
//! which is what a fresh page load amounts to.

use std::fmt;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use parking_lot::RwLock;

use super::engine::{is_searchable, search};
use crate::types::{IndexRecord, SearchResult};

/// Why an index could not be loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadError {
    /// The artifact could not be read.
    Unavailable { location: String, message: String },
    /// The artifact was read but is not a JSON array of records.
    Malformed { message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Unavailable { location, message } => {
                write!(f, "index unavailable at {}: {}", location, message)
            }
            LoadError::Malformed { message } => write!(f, "malformed index: {}", message),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the index JSON comes from.
pub trait IndexSource {
    /// Fetch the raw JSON text.
    fn fetch(&self) -> Result<String, LoadError>;
}

/// Index artifact on disk.
#[derive(Clone, Debug)]
pub struct FileSource {
    pub path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IndexSource for FileSource {
    fn fetch(&self) -> Result<String, LoadError> {
        fs::read_to_string(&self.path).map_err(|e| LoadError::Unavailable {
            location: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

/// Index JSON already in memory (handed over by the browser, or a test).
#[derive(Clone, Debug)]
pub struct StaticSource {
    pub json: String,
}

impl StaticSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl IndexSource for StaticSource {
    fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.json.clone())
    }
}

/// Decode index JSON.
pub fn parse_index(json: &str) -> Result<Vec<IndexRecord>, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::Malformed {
        message: e.to_string(),
    })
}

enum LoadState {
    Unloaded,
    Loaded(Arc<[IndexRecord]>),
    Failed(LoadError),
}

/// Observable state of an [`IndexCache`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CacheStatus {
    Unloaded,
    Loaded { records: usize },
    Failed(LoadError),
}

/// Once-initialized, shareable index handle.
pub struct IndexCache {
    state: RwLock<LoadState>,
}

impl Default for IndexCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexCache {
    /// An empty handle; nothing is fetched until the first search.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LoadState::Unloaded),
        }
    }

    /// A handle that is already loaded.
    pub fn from_records(records: Vec<IndexRecord>) -> Self {
        Self {
            state: RwLock::new(LoadState::Loaded(records.into())),
        }
    }

    /// Return the loaded index, fetching it from `source` on first use.
    ///
    /// Only the first call fetches; its outcome, success or failure, is
    /// returned by every later call until [`reset`](Self::reset).
    pub fn get_or_load(&self, source: &dyn IndexSource) -> Result<Arc<[IndexRecord]>, LoadError> {
        if let Some(outcome) = self.settled() {
            return outcome;
        }

        let mut state = self.state.write();
        // Another caller may have settled it while we waited
        match &*state {
            LoadState::Loaded(index) => return Ok(Arc::clone(index)),
            LoadState::Failed(err) => return Err(err.clone()),
            LoadState::Unloaded => {}
        }

        match source.fetch().and_then(|json| parse_index(&json)) {
            Ok(records) => {
                let index: Arc<[IndexRecord]> = records.into();
                *state = LoadState::Loaded(Arc::clone(&index));
                Ok(index)
            }
            Err(err) => {
                *state = LoadState::Failed(err.clone());
                Err(err)
            }
        }
    }

    fn settled(&self) -> Option<Result<Arc<[IndexRecord]>, LoadError>> {
        match &*self.state.read() {
            LoadState::Unloaded => None,
            LoadState::Loaded(index) => Some(Ok(Arc::clone(index))),
            LoadState::Failed(err) => Some(Err(err.clone())),
        }
    }

    /// Search from the input box: short inputs skip the fetch entirely, and
    /// load failures become an empty result set.
    pub fn search_input(&self, source: &dyn IndexSource, input: &str) -> Vec<SearchResult> {
        if !is_searchable(input) {
            return Vec::new();
        }
        match self.get_or_load(source) {
            Ok(index) => search(&index, input),
            Err(_) => Vec::new(),
        }
    }

    pub fn status(&self) -> CacheStatus {
        match &*self.state.read() {
            LoadState::Unloaded => CacheStatus::Unloaded,
            LoadState::Loaded(index) => CacheStatus::Loaded {
                records: index.len(),
            },
            LoadState::Failed(err) => CacheStatus::Failed(err.clone()),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(&*self.state.read(), LoadState::Loaded(_))
    }

    /// Forget the loaded index (or the failure) so the next search fetches again.
    pub fn reset(&self) {
        *self.state.write() = LoadState::Unloaded;
    }
}
