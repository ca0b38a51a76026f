//! Scoring and ordering against the fixture site.

use crate::common::{fixture_index, make_page, make_section};
use docsift::scoring::{CONTENT_SCORE, H2_SCORE, H3_SCORE, TITLE_SCORE};
use docsift::{search, search_input, ResultKind, MAX_RESULTS};

#[test]
fn test_title_page_outranks_heading() {
    let index = fixture_index();
    let results = search_input(&index, "keybind");

    assert_eq!(results[0].kind, ResultKind::Page);
    assert_eq!(results[0].slug, "keybindings");
    assert_eq!(results[0].score, TITLE_SCORE);

    let section = results
        .iter()
        .find(|r| r.kind == ResultKind::Section)
        .expect("configuration heading should match");
    assert_eq!(section.slug, "configuration");
    assert!(section.score == H2_SCORE || section.score == H3_SCORE);
    assert_eq!(section.href(), "/docs/configuration#keybindings");
}

#[test]
fn test_content_matches_rank_last() {
    let index = fixture_index();
    let results = search_input(&index, "keybind");
    let scores: Vec<u32> = results.iter().map(|r| r.score).collect();

    assert_eq!(scores, vec![TITLE_SCORE, H2_SCORE, CONTENT_SCORE, CONTENT_SCORE]);
    // Equal scores keep index order: root page first
    assert_eq!(results[2].href(), "/docs");
    assert_eq!(results[3].href(), "/docs/configuration");
}

#[test]
fn test_same_heading_on_two_pages() {
    let index = fixture_index();
    let hrefs: Vec<String> = search_input(&index, "overview")
        .iter()
        .map(|r| r.href())
        .collect();

    assert_eq!(
        hrefs,
        vec![
            "/docs#overview",
            "/docs/keybindings#overview",
            "/docs",
            "/docs/keybindings",
        ]
    );
}

#[test]
fn test_case_insensitive() {
    let index = fixture_index();
    assert_eq!(search_input(&index, "IPC"), search_input(&index, "ipc"));
}

#[test]
fn test_nonsense_query_is_empty() {
    let index = fixture_index();
    assert!(search_input(&index, "xyzzy123").is_empty());
}

#[test]
fn test_short_queries_return_nothing() {
    let index = fixture_index();
    assert!(search_input(&index, "").is_empty());
    assert!(search_input(&index, "k").is_empty());
    // Two characters is enough
    assert!(!search_input(&index, "ke").is_empty());
}

#[test]
fn test_level_three_heading_scores_lower() {
    let index = vec![
        make_page("a", "A", "", ""),
        make_section("a", "A", "Panel layout", 3),
        make_page("b", "B", "", ""),
        make_section("b", "B", "Panel families", 2),
    ];
    let results = search(&index, "panel");
    assert_eq!(results[0].slug, "b");
    assert_eq!(results[1].score, H3_SCORE);
}

#[test]
fn test_result_count_capped() {
    let index: Vec<_> = (0..40)
        .map(|i| make_page(&format!("page-{}", i), &format!("Page {}", i), "", "shared term"))
        .collect();
    let results = search_input(&index, "shared");
    assert_eq!(results.len(), MAX_RESULTS);
    assert_eq!(results[0].slug, "page-0");
    assert_eq!(results[11].slug, "page-11");
}
