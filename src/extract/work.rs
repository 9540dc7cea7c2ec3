//! Work extraction from a full-work document
//!
//! Operates on pages fetched with the "view full work" query option, so
//! every chapter is present in one document and no pagination is needed.
//!
//! Missing optional fields degrade to defaults; the only hard failure is
//! a document with no title and no chapter content at all, which means
//! extraction plainly failed (login wall, deleted work, error page).

use crate::extract::collapse_whitespace;
use crate::model::{Chapter, Work};
use crate::site;
use crate::ExtractionError;
use scraper::{ElementRef, Html, Selector};

/// Author shown when the document carries no author link (e.g. orphaned
/// or anonymous works)
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Title shown when the document has chapters but no title heading
const UNTITLED: &str = "Untitled";

/// Extracts a structured [`Work`] from a full-work HTML document
///
/// # Arguments
///
/// * `work_id` - The work's identifier (used for the record and diagnostics)
/// * `html` - Raw HTML of the full-work page
///
/// # Returns
///
/// * `Ok(Work)` - Extracted work; may be partial (`chapters_fetched <
///   total_chapters`), which callers should surface rather than ignore
/// * `Err(ExtractionError)` - Document has neither a title nor any chapters
pub fn extract_work(work_id: &str, html: &str) -> Result<Work, ExtractionError> {
    let document = Html::parse_document(html);

    let title = extract_title(&document);
    let author = extract_author(&document).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let chapters = extract_chapters(&document);

    if title.is_none() && chapters.is_empty() {
        return Err(ExtractionError::NoContent {
            work_id: work_id.to_string(),
        });
    }

    let chapters_fetched = chapters.len() as u32;

    // Single-chapter works omit the chapter-count marker, so the declared
    // count defaults to 1. A marker that undercounts what the document
    // actually contains loses to the fetched count; the work is only
    // partial when the declared count genuinely exceeds it.
    let total_chapters = declared_chapter_count(&document)
        .unwrap_or(1)
        .max(chapters_fetched)
        .max(1);

    Ok(Work {
        work_id: work_id.to_string(),
        url: site::canonical_work_url(site::SITE_ORIGIN, work_id),
        title: title.unwrap_or_else(|| UNTITLED.to_string()),
        author,
        total_chapters,
        chapters_fetched,
        chapters,
    })
}

/// First `h2.title` heading, trimmed
fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("h2.title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))
        .filter(|s| !s.is_empty())
}

/// First author link in the byline
fn extract_author(document: &Html) -> Option<String> {
    // rel="author" is the stable marker; class-based bylines are the fallback
    for pattern in ["a[rel='author']", ".byline a"] {
        let Ok(selector) = Selector::parse(pattern) else {
            continue;
        };
        if let Some(author) = document
            .select(&selector)
            .next()
            .map(|element| collapse_whitespace(&element.text().collect::<String>()))
            .filter(|s| !s.is_empty())
        {
            return Some(author);
        }
    }
    None
}

/// Declared chapter count from the `dd.chapters` statistics field
///
/// The field reads `fetched/total`, e.g. `2/2` or `3/?` for works still
/// in progress. An unknown total (`?`) yields `None`.
fn declared_chapter_count(document: &Html) -> Option<u32> {
    let selector = Selector::parse("dd.chapters").ok()?;
    let text = document
        .select(&selector)
        .next()
        .map(|element| collapse_whitespace(&element.text().collect::<String>()))?;

    text.split('/').nth(1)?.trim().parse().ok()
}

/// Splits the document into chapters, in document order
fn extract_chapters(document: &Html) -> Vec<Chapter> {
    let chapters = chapter_divisions(document);
    if !chapters.is_empty() {
        return chapters;
    }

    // No chapter boundary markers: single-chapter works render their one
    // content block without a chapter wrapper.
    bare_content_blocks(document)
}

/// Chapters delimited by `div.chapter` wrappers carrying `id="chapter-N"`
fn chapter_divisions(document: &Html) -> Vec<Chapter> {
    let Ok(chapter_selector) = Selector::parse("div.chapter[id^='chapter-']") else {
        return Vec::new();
    };
    let Ok(heading_selector) = Selector::parse("h3.title") else {
        return Vec::new();
    };
    let Ok(body_selector) = Selector::parse("div.userstuff") else {
        return Vec::new();
    };

    let mut chapters = Vec::new();

    for element in document.select(&chapter_selector) {
        let Some(id_attr) = element.value().attr("id") else {
            continue;
        };
        let chapter_id = id_attr.trim_start_matches("chapter-").to_string();

        let chapter_title = element
            .select(&heading_selector)
            .next()
            .map(|heading| collapse_whitespace(&heading.text().collect::<String>()))
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("Chapter {}", chapter_id));

        // A heading with an empty (or missing) body is still a valid
        // chapter; the segment count is what matters.
        let content = element
            .select(&body_selector)
            .next()
            .map(block_text)
            .unwrap_or_default();

        chapters.push(Chapter {
            chapter_id,
            chapter_title,
            content,
        });
    }

    chapters
}

/// Fallback: every bare `div.userstuff` content block becomes one chapter
/// with a synthesized ordinal id and heading
fn bare_content_blocks(document: &Html) -> Vec<Chapter> {
    // div only: summaries and notes use blockquote.userstuff and are not
    // chapter content
    let Ok(body_selector) = Selector::parse("div.userstuff") else {
        return Vec::new();
    };

    document
        .select(&body_selector)
        .enumerate()
        .map(|(i, element)| {
            let ordinal = i + 1;
            Chapter {
                chapter_id: ordinal.to_string(),
                chapter_title: format!("Chapter {}", ordinal),
                content: block_text(element),
            }
        })
        .collect()
}

/// Plain text of a content block: tags stripped, whitespace collapsed,
/// paragraph breaks preserved as newlines
fn block_text(element: ElementRef) -> String {
    let Ok(paragraph_selector) = Selector::parse("p") else {
        return collapse_whitespace(&element.text().collect::<String>());
    };

    let paragraphs: Vec<String> = element
        .select(&paragraph_selector)
        .map(|p| collapse_whitespace(&p.text().collect::<String>()))
        .filter(|s| !s.is_empty())
        .collect();

    if paragraphs.is_empty() {
        // Content without <p> markup: flatten the whole block
        collapse_whitespace(&element.text().collect::<String>())
    } else {
        paragraphs.join("\n")
    }
}
