//! The search surface driven end to end against a real index.

use crate::common::fixture_index;
use docsift::search::Phase;
use docsift::{IndexCache, SearchEvent, SearchSession, StaticSource};

fn fixture_source() -> StaticSource {
    StaticSource::new(serde_json::to_string(&fixture_index()).unwrap())
}

#[test]
fn test_type_select_accept() {
    let cache = IndexCache::new();
    let source = fixture_source();
    let mut session = SearchSession::new(&cache, &source);

    session.dispatch(SearchEvent::Open);
    session.dispatch(SearchEvent::QueryChanged("i".to_string()));
    assert_eq!(session.state().phase(), Phase::OpenEmpty);
    assert!(!cache.is_loaded(), "one character must not fetch the index");

    session.dispatch(SearchEvent::QueryChanged("ipc".to_string()));
    assert_eq!(session.state().phase(), Phase::OpenResults);
    assert!(cache.is_loaded());

    let hrefs: Vec<String> = session.state().results.iter().map(|r| r.href()).collect();
    assert_eq!(hrefs, vec!["/docs/ipc", "/docs/ipc#qs-ipc-call", "/docs"]);

    session.dispatch(SearchEvent::SelectNext);
    session.dispatch(SearchEvent::Accept);
    assert_eq!(session.navigations(), ["/docs/ipc#qs-ipc-call".to_string()]);
    assert_eq!(session.state().phase(), Phase::Closed);
    assert!(session.state().query.is_empty());
}

#[test]
fn test_no_results_phase() {
    let cache = IndexCache::new();
    let source = fixture_source();
    let mut session = SearchSession::new(&cache, &source);

    session.dispatch(SearchEvent::Open);
    session.dispatch(SearchEvent::QueryChanged("xyzzy123".to_string()));
    assert_eq!(session.state().phase(), Phase::OpenNoResults);

    session.dispatch(SearchEvent::Accept);
    assert!(session.navigations().is_empty());
    assert_eq!(session.state().phase(), Phase::OpenNoResults);
}

#[test]
fn test_broken_index_shows_no_results() {
    let cache = IndexCache::new();
    let source = StaticSource::new("<!doctype html>");
    let mut session = SearchSession::new(&cache, &source);

    session.dispatch(SearchEvent::Open);
    session.dispatch(SearchEvent::QueryChanged("ipc".to_string()));
    assert_eq!(session.state().phase(), Phase::OpenNoResults);
}

#[test]
fn test_reopen_starts_empty() {
    let cache = IndexCache::new();
    let source = fixture_source();
    let mut session = SearchSession::new(&cache, &source);

    session.dispatch(SearchEvent::Open);
    session.dispatch(SearchEvent::QueryChanged("theming".to_string()));
    session.dispatch(SearchEvent::Close);
    session.dispatch(SearchEvent::Open);

    assert_eq!(session.state().phase(), Phase::OpenEmpty);
    assert!(session.state().results.is_empty());
}
