//! Search for statically exported documentation sites.
//!
//! Two halves: an Index Builder that runs once per site build and turns a
//! directory of `.mdx` documents into one `search-index.json`, and a Query
//! Engine that loads that file once and ranks records against each query with
//! no server round trip.
//!
//! # Architecture
//!
//! ```text
//!   docs/*.mdx ──▶ build::{frontmatter, headings} ──▶ build ──▶ search-index.json
//!                                                                  │
//!                                                                  ▼
//!   SearchState ◀── search::state ◀── search::engine ◀── search::loader (IndexCache)
//!        │                                 │
//!        ▼                                 ▼
//!   nav::doc_href                    scoring + search::dedup
//! ```
//!
//! # Usage
//!
//! ```
//! use docsift::testing::sample_index;
//! use docsift::search_input;
//!
//! let index = sample_index();
//! let results = search_input(&index, "keybind");
//! assert_eq!(results[0].href(), "/docs/keybindings");
//!
//! // One character never searches
//! assert!(search_input(&index, "k").is_empty());
//! ```

pub mod build;
pub mod nav;
pub mod scoring;
pub mod search;
pub mod types;
pub mod util;
pub mod verify;

#[doc(hidden)]
pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

pub use build::{build_index, derive_anchor, run_build, Document};
pub use nav::{breadcrumbs, doc_href, doc_navigation, find_doc};
pub use search::{
    reduce, search, search_input, FileSource, IndexCache, IndexSource, SearchEvent,
    SearchSession, SearchState, StaticSource, MAX_RESULTS,
};
pub use types::{IndexRecord, PageRecord, ResultKind, SearchResult, SectionRecord};
pub use verify::{validate_index, IndexInvariantError};
