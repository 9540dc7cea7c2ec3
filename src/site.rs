//! Work-id input handling and AO3 URL construction
//!
//! The CLI accepts either a bare numeric id or a full work URL; everything
//! downstream operates on the id alone. URL construction lives here so the
//! rest of the crate never concatenates site paths by hand.

use crate::ExtractionError;
use url::Url;

/// Base origin of the archive
pub const SITE_ORIGIN: &str = "https://archiveofourown.org";

/// Canonical URL of a work (paginated view)
///
/// `origin` is the site origin, [`SITE_ORIGIN`] outside of tests.
pub fn canonical_work_url(origin: &str, work_id: &str) -> String {
    format!("{}/works/{}", origin, work_id)
}

/// URL that renders every chapter of a work in one document
pub fn full_work_url(origin: &str, work_id: &str) -> String {
    format!("{}/works/{}?view_full_work=true", origin, work_id)
}

/// Resolves a CLI work argument to a bare work id.
///
/// Accepts a numeric id (`79906886`) or any URL containing a
/// `/works/{id}` path segment pair; query strings and deeper paths
/// (e.g. `/chapters/...`) are ignored.
pub fn parse_work_input(input: &str) -> Result<String, ExtractionError> {
    let input = input.trim();

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Ok(input.to_string());
    }

    if let Ok(url) = Url::parse(input) {
        if let Some(id) = work_id_from_path(url.path()) {
            return Ok(id);
        }
    }

    Err(ExtractionError::InvalidWorkInput(input.to_string()))
}

/// Pulls the work id out of a URL path, if the path names a work.
///
/// Matches `/works/{digits}` exactly at the segment level, so index pages
/// (`/works`) and nested resources (`/works/1/chapters/2`) still resolve
/// to the id while non-work links do not.
pub fn work_id_from_path(path: &str) -> Option<String> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    while let Some(segment) = segments.next() {
        if segment == "works" {
            let id = segments.next()?;
            if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
                return Some(id.to_string());
            }
            return None;
        }
    }
    None
}
