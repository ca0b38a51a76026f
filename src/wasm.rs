//! WebAssembly bindings for the docs search.
//!
//! The page fetches `/search-index.json` itself and hands the text to
//! [`DocsSearch::load`]. Decoding happens once; a malformed index leaves the
//! searcher empty rather than throwing, so the search box shows no results.

use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

use crate::search::{IndexCache, StaticSource};
use crate::types::{ResultKind, SearchResult};

/// Search result output for TypeScript consumption.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchResultOutput {
    #[serde(rename = "type")]
    kind: ResultKind,
    title: String,
    slug: String,
    excerpt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section_anchor: Option<String>,
    href: String,
}

impl From<SearchResult> for SearchResultOutput {
    fn from(result: SearchResult) -> Self {
        let href = result.href();
        Self {
            kind: result.kind,
            title: result.title,
            slug: result.slug,
            excerpt: result.excerpt,
            section: result.section,
            section_anchor: result.section_anchor,
            href,
        }
    }
}

#[wasm_bindgen]
pub struct DocsSearch {
    cache: IndexCache,
    source: Option<StaticSource>,
}

impl Default for DocsSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl DocsSearch {
    #[wasm_bindgen(constructor)]
    pub fn new() -> DocsSearch {
        DocsSearch {
            cache: IndexCache::new(),
            source: None,
        }
    }

    /// Load index JSON. Returns false (and stays empty) when it does not decode.
    #[wasm_bindgen]
    pub fn load(&mut self, json: &str) -> bool {
        self.cache.reset();
        let source = StaticSource::new(json);
        let loaded = self.cache.get_or_load(&source).is_ok();
        self.source = Some(source);
        loaded
    }

    #[wasm_bindgen(js_name = isLoaded)]
    pub fn is_loaded(&self) -> bool {
        self.cache.is_loaded()
    }

    /// Ranked results for the search box input. Fewer than two characters,
    /// or no index, gives an empty array.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        let results: Vec<SearchResultOutput> = match &self.source {
            Some(source) => self
                .cache
                .search_input(source, query)
                .into_iter()
                .map(SearchResultOutput::from)
                .collect(),
            None => Vec::new(),
        };
        to_value(&results).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Drop the loaded index.
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.cache.reset();
        self.source = None;
    }
}
