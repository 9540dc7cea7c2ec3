//! Search-page walker
//!
//! Walks search/listing result pages via their `rel="next"` links,
//! harvesting work ids as it goes. A page fetch failure stops the walk
//! but keeps everything collected up to that point: a partial id list is
//! still a usable result.

use crate::{extract, fetch, TransportError};
use reqwest::Client;
use std::collections::HashSet;
use std::time::Duration;
use url::Url;

/// Result of a search walk
#[derive(Debug)]
pub struct SearchOutcome {
    /// Work ids in first-seen order, de-duplicated across pages
    pub work_ids: Vec<String>,

    /// Result pages successfully fetched
    pub pages_walked: u32,

    /// "N works found" banner from the first page, if present
    pub total_reported: Option<String>,

    /// Fetch failure that cut the walk short, if any
    pub page_error: Option<TransportError>,
}

/// Walks result pages from `start_url`, collecting work ids
///
/// Follows `rel="next"` links up to `max_pages` pages, sleeping
/// `page_delay` between pages. Ids are de-duplicated across pages,
/// preserving first-seen order.
///
/// A page that fails to fetch ends the walk early; the ids collected so
/// far are returned alongside the error rather than discarded. Only an
/// unparseable `start_url` is a hard error.
pub async fn collect_work_ids(
    client: &Client,
    start_url: &str,
    max_pages: u32,
    page_delay: Duration,
) -> crate::Result<SearchOutcome> {
    let mut current_url = Some(Url::parse(start_url)?);
    let mut seen = HashSet::new();
    let mut work_ids = Vec::new();
    let mut total_reported = None;
    let mut page_error = None;
    let mut pages_walked = 0u32;

    while let Some(url) = current_url.take() {
        tracing::info!("Search page {}: {}", pages_walked + 1, url);

        let html = match fetch::fetch_page(client, url.as_str()).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!(
                    "Search page failed ({}); keeping the {} ids collected so far",
                    e,
                    work_ids.len()
                );
                page_error = Some(e);
                break;
            }
        };
        pages_walked += 1;

        if pages_walked == 1 {
            total_reported = extract::total_works(&html);
            if let Some(total) = &total_reported {
                tracing::info!("Total works reported: {}", total);
            }
        }

        let page_ids = extract::extract_work_ids(&html);
        tracing::info!("  found {} work ids", page_ids.len());
        for id in page_ids {
            if seen.insert(id.clone()) {
                work_ids.push(id);
            }
        }

        if pages_walked >= max_pages {
            tracing::info!("Reached page limit ({})", max_pages);
            break;
        }

        current_url = extract::next_page_url(&html, &url).and_then(|next| Url::parse(&next).ok());
        if current_url.is_some() {
            tokio::time::sleep(page_delay).await;
        }
    }

    Ok(SearchOutcome {
        work_ids,
        pages_walked,
        total_reported,
        page_error,
    })
}
