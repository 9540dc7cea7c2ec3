//! Record types produced by the extractors and the batch driver
//!
//! All of these are write-once: they are assembled in full and then
//! serialized, never mutated afterwards. Field names match the persisted
//! JSON shape exactly.

use serde::{Deserialize, Serialize};

/// One chapter of a work, in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Site-assigned chapter id, or the ordinal for single-chapter works
    pub chapter_id: String,

    /// Display heading; synthesized as "Chapter N" when the document has none
    pub chapter_title: String,

    /// Plain text body with paragraph breaks preserved as newlines
    pub content: String,
}

/// A fully extracted work
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Work {
    pub work_id: String,

    /// Canonical work URL (without the full-work query parameter)
    pub url: String,

    pub title: String,
    pub author: String,

    /// Chapter count the work declares in its statistics block
    pub total_chapters: u32,

    /// Chapters actually present in the fetched document
    pub chapters_fetched: u32,

    pub chapters: Vec<Chapter>,
}

impl Work {
    /// True when fewer chapters were extracted than the work declares.
    ///
    /// A partial work is still a valid record but must never be treated
    /// as complete.
    pub fn is_partial(&self) -> bool {
        self.chapters_fetched < self.total_chapters
    }
}

/// Outcome of one batch item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemOutcome {
    pub work_id: String,
    pub status: OutcomeStatus,

    /// Work title, present on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Error description, present on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ItemOutcome {
    pub fn success(work_id: &str, title: &str) -> Self {
        Self {
            work_id: work_id.to_string(),
            status: OutcomeStatus::Success,
            title: Some(title.to_string()),
            error: None,
        }
    }

    pub fn failure(work_id: &str, error: String) -> Self {
        Self {
            work_id: work_id.to_string(),
            status: OutcomeStatus::Failure,
            title: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Failure,
}

/// Aggregate result of a batch run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,

    /// Total wall time of the run, including politeness delays
    pub elapsed_seconds: f64,

    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: chrono::DateTime<chrono::Utc>,

    /// Per-identifier outcomes in processing order
    pub outcomes: Vec<ItemOutcome>,
}
