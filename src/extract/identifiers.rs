//! Work-id extraction from search and listing pages

use crate::extract::collapse_whitespace;
use crate::site;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts every work id referenced by the page
///
/// Scans all links for `/works/{id}` paths (relative or absolute; deeper
/// paths like `/works/{id}/chapters/{n}` resolve to the work id) and
/// returns them de-duplicated, preserving first-seen order.
///
/// A page with zero work references yields an empty vector, not an error.
pub fn extract_work_ids(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let Ok(link_selector) = Selector::parse("a[href]") else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    let mut ids = Vec::new();

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if let Some(id) = work_id_from_href(href) {
            if seen.insert(id.clone()) {
                ids.push(id);
            }
        }
    }

    ids
}

/// Resolves the `rel="next"` pagination link, if the page has one
///
/// # Arguments
///
/// * `html` - The listing page
/// * `base` - URL the page was fetched from, for resolving relative hrefs
pub fn next_page_url(html: &str, base: &Url) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[rel='next'][href]").ok()?;

    let href = document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))?;

    base.join(href).ok().map(|url| url.to_string())
}

/// Total result count banner ("1,234 Works found"), if present
pub fn total_works(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h2.heading, h3.heading").ok()?;

    for element in document.select(&selector) {
        let text = collapse_whitespace(&element.text().collect::<String>());
        let lowered = text.to_ascii_lowercase();
        if lowered.contains("works found") || lowered.ends_with("found") {
            let count = text.split_whitespace().next()?;
            if count.chars().all(|c| c.is_ascii_digit() || c == ',') {
                return Some(count.to_string());
            }
        }
    }

    None
}

/// Pulls a work id out of a link target
fn work_id_from_href(href: &str) -> Option<String> {
    // Absolute links carry their own path; everything else is treated as
    // a site-relative path with any query/fragment cut off.
    if let Ok(url) = Url::parse(href) {
        return site::work_id_from_path(url.path());
    }

    let path = href.split(['?', '#']).next()?;
    site::work_id_from_path(path)
}
