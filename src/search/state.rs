// Copyright 2025-present docsift contributors
// SPDX-License-Identifier: Apache-2.0

//! The search surface as an explicit state machine.
//!
//! All UI state lives in one [`SearchState`] and changes only through
//! [`reduce`], a pure function of `(state, event)`. Side effects are returned
//! as a [`Command`] for the host to run: search the index, or navigate. The
//! host feeds search output back as [`SearchEvent::ResultsReady`].
//!
//! ```text
//!            Open                 ≥2 chars              ResultsReady
//!  Closed ─────────▶ OpenEmpty ─────────────▶ OpenTyping ───────────▶ OpenResults
//!    ▲                  ▲   ◀──────────────┘                  └─────▶ OpenNoResults
//!    │ Close / Accept   │        <2 chars
//!    └──────────────────┴──────────────────────────────────────────────────────
//! ```

use super::engine::is_searchable;
use super::loader::{IndexCache, IndexSource};
use crate::types::SearchResult;

/// Coarse phase of the search surface, derived from [`SearchState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Closed,
    /// Open, query too short to search.
    OpenEmpty,
    /// Open, waiting for results of the current query.
    OpenTyping,
    OpenResults,
    OpenNoResults,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchEvent {
    Open,
    /// Closes the surface and clears the query.
    Close,
    QueryChanged(String),
    ResultsReady {
        query: String,
        results: Vec<SearchResult>,
    },
    SelectNext,
    SelectPrev,
    /// Confirm the selected result.
    Accept,
}

/// Side effect requested by a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run a search for this query and report back with `ResultsReady`.
    Search(String),
    /// Go to this location.
    Navigate(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchState {
    pub open: bool,
    pub query: String,
    pub results: Vec<SearchResult>,
    /// Query the current `results` belong to, `None` while waiting.
    pub results_for: Option<String>,
    pub selected: usize,
}

impl SearchState {
    pub fn phase(&self) -> Phase {
        if !self.open {
            Phase::Closed
        } else if !is_searchable(&self.query) {
            Phase::OpenEmpty
        } else if self.results_for.as_deref() != Some(self.query.as_str()) {
            Phase::OpenTyping
        } else if self.results.is_empty() {
            Phase::OpenNoResults
        } else {
            Phase::OpenResults
        }
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.results.get(self.selected)
    }
}

/// Apply one event. Pure: same state and event always give the same output.
pub fn reduce(state: SearchState, event: SearchEvent) -> (SearchState, Option<Command>) {
    match event {
        SearchEvent::Open => (
            SearchState {
                open: true,
                ..state
            },
            None,
        ),
        SearchEvent::Close => (close(), None),
        SearchEvent::QueryChanged(query) => {
            let searchable = is_searchable(&query);
            let command = searchable.then(|| Command::Search(query.clone()));
            let next = SearchState {
                query,
                results: Vec::new(),
                results_for: None,
                selected: 0,
                ..state
            };
            (next, command)
        }
        SearchEvent::ResultsReady { query, results } => {
            // Results for a query the user has since edited away from
            if query != state.query || !is_searchable(&state.query) {
                return (state, None);
            }
            let next = SearchState {
                results,
                results_for: Some(query),
                selected: 0,
                ..state
            };
            (next, None)
        }
        SearchEvent::SelectNext => {
            let last = state.results.len().saturating_sub(1);
            let selected = (state.selected + 1).min(last);
            (SearchState { selected, ..state }, None)
        }
        SearchEvent::SelectPrev => {
            let selected = state.selected.saturating_sub(1);
            (SearchState { selected, ..state }, None)
        }
        SearchEvent::Accept => match state.selected_result().map(SearchResult::href) {
            Some(href) => (close(), Some(Command::Navigate(href))),
            None => (state, None),
        },
    }
}

/// Closing drops the query, its results and the selection.
fn close() -> SearchState {
    SearchState::default()
}

/// Drives [`reduce`] against an index handle, running commands synchronously.
pub struct SearchSession<'a> {
    state: SearchState,
    cache: &'a IndexCache,
    source: &'a dyn IndexSource,
    navigations: Vec<String>,
}

impl<'a> SearchSession<'a> {
    pub fn new(cache: &'a IndexCache, source: &'a dyn IndexSource) -> Self {
        Self {
            state: SearchState::default(),
            cache,
            source,
            navigations: Vec::new(),
        }
    }

    /// Dispatch an event and run whatever it asks for.
    pub fn dispatch(&mut self, event: SearchEvent) {
        let (next, command) = reduce(std::mem::take(&mut self.state), event);
        self.state = next;

        match command {
            Some(Command::Search(query)) => {
                let results = self.cache.search_input(self.source, &query);
                self.dispatch(SearchEvent::ResultsReady { query, results });
            }
            Some(Command::Navigate(href)) => self.navigations.push(href),
            None => {}
        }
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Locations navigated to so far, oldest first.
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}
