//! Integration tests for the search page walk
//!
//! These serve mock listing pages linked by rel="next" and exercise the
//! multi-page walk end-to-end: accumulation order, cross-page dedup, the
//! page limit, and early stop on a page failure.

use ao3_fetch::config::FetcherConfig;
use ao3_fetch::fetch::build_http_client;
use ao3_fetch::search::collect_work_ids;
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A minimal search results page
fn listing_html(ids: &[&str], next_href: Option<&str>) -> String {
    let mut body = String::from(
        r#"<html><body>
<h3 class="heading">5 Works found</h3>
<ol class="work index group">"#,
    );
    for id in ids {
        body.push_str(&format!(r#"<li><a href="/works/{id}">Work {id}</a></li>"#));
    }
    body.push_str("</ol>");
    if let Some(href) = next_href {
        body.push_str(&format!(
            r#"<ol class="pagination"><li><a rel="next" href="{href}">Next</a></li></ol>"#
        ));
    }
    body.push_str("</body></html>");
    body
}

fn test_client() -> reqwest::Client {
    build_http_client(&FetcherConfig::default()).expect("Failed to build client")
}

const PAGE_DELAY: Duration = Duration::from_millis(10);

/// Mounts page 2 before page 1: the page-2 mock is more specific and must
/// win for requests carrying page=2.
async fn mount_two_pages(server: &MockServer, page2: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/works/search"))
        .and(query_param("page", "2"))
        .respond_with(page2)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(
            &["11", "22", "33"],
            Some("/works/search?commit=Search&page=2"),
        )))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_walk_accumulates_and_dedups_across_pages() {
    let server = MockServer::start().await;
    mount_two_pages(
        &server,
        // 22 repeats on page 2 and must not repeat in the result
        ResponseTemplate::new(200).set_body_string(listing_html(&["22", "44"], None)),
    )
    .await;

    let start = format!("{}/works/search?commit=Search", server.uri());
    let outcome = collect_work_ids(&test_client(), &start, 5, PAGE_DELAY)
        .await
        .unwrap();

    assert_eq!(outcome.work_ids, ["11", "22", "33", "44"]);
    assert_eq!(outcome.pages_walked, 2);
    assert_eq!(outcome.total_reported.as_deref(), Some("5"));
    assert!(outcome.page_error.is_none());
}

#[tokio::test]
async fn test_walk_stops_at_page_limit() {
    let server = MockServer::start().await;

    // Page 2 exists but must never be requested with max_pages = 1
    Mock::given(method("GET"))
        .and(path("/works/search"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(&["44"], None)))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/works/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html(
            &["11", "22", "33"],
            Some("/works/search?commit=Search&page=2"),
        )))
        .mount(&server)
        .await;

    let start = format!("{}/works/search?commit=Search", server.uri());
    let outcome = collect_work_ids(&test_client(), &start, 1, PAGE_DELAY)
        .await
        .unwrap();

    assert_eq!(outcome.work_ids, ["11", "22", "33"]);
    assert_eq!(outcome.pages_walked, 1);
}

#[tokio::test]
async fn test_page_failure_keeps_collected_ids() {
    let server = MockServer::start().await;
    mount_two_pages(&server, ResponseTemplate::new(500)).await;

    let start = format!("{}/works/search?commit=Search", server.uri());
    let outcome = collect_work_ids(&test_client(), &start, 5, PAGE_DELAY)
        .await
        .unwrap();

    // The failing page ends the walk but never discards page 1's ids
    assert_eq!(outcome.work_ids, ["11", "22", "33"]);
    assert_eq!(outcome.pages_walked, 1);
    let error = outcome.page_error.expect("expected a page error");
    assert!(error.to_string().contains("500"));
}

#[tokio::test]
async fn test_first_page_failure_yields_empty_partial_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/works/search"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let start = format!("{}/works/search?commit=Search", server.uri());
    let outcome = collect_work_ids(&test_client(), &start, 5, PAGE_DELAY)
        .await
        .unwrap();

    assert!(outcome.work_ids.is_empty());
    assert_eq!(outcome.pages_walked, 0);
    assert!(outcome.page_error.is_some());
}

#[tokio::test]
async fn test_invalid_start_url_is_an_error() {
    let result = collect_work_ids(&test_client(), "not a url", 1, PAGE_DELAY).await;
    assert!(result.is_err());
}
