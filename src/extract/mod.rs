//! HTML extraction
//!
//! This module turns fetched archive pages into structured data:
//! - `work`: title, author, and chapter extraction from a full-work document
//! - `identifiers`: work-id harvesting from search/listing pages
//!
//! Extraction uses a structural HTML parse (scraper) rather than the
//! pattern scanning the archive's markup would also tolerate; the
//! field-extraction contract is the same either way.

mod identifiers;
mod work;

pub use identifiers::{extract_work_ids, next_page_url, total_works};
pub use work::extract_work;

/// Collapses all runs of whitespace to single spaces and trims the ends.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
