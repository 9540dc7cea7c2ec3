//! Batch driver
//!
//! Applies the single-work pipeline (fetch, extract, write) to a list of
//! work ids, strictly sequentially, with a fixed politeness delay between
//! works. One item's failure never stops the rest of the batch.

use crate::model::{BatchReport, ItemOutcome};
use crate::output;
use crate::{extract, fetch, site, Result, Work};
use reqwest::Client;
use std::path::Path;
use std::time::{Duration, Instant};

/// Fetches and extracts a single work
///
/// This is the one-item pipeline both the `work` command and the batch
/// driver run: build the full-work URL, fetch the document, extract the
/// structured record.
///
/// # Arguments
///
/// * `client` - The HTTP client
/// * `origin` - Site origin (`site::SITE_ORIGIN` outside of tests)
/// * `work_id` - The work to fetch
pub async fn fetch_work(client: &Client, origin: &str, work_id: &str) -> Result<Work> {
    let url = site::full_work_url(origin, work_id);
    tracing::debug!("Fetching {}", url);

    let html = fetch::fetch_page(client, &url).await?;
    let work = extract::extract_work(work_id, &html)?;

    if work.is_partial() {
        tracing::warn!(
            "Work {} is partial: {}/{} chapters present",
            work.work_id,
            work.chapters_fetched,
            work.total_chapters
        );
    }

    Ok(work)
}

/// Runs the batch: one work after another, `delay` apart
///
/// Each successful work is written to `output_dir` as `ao3_{id}.json`
/// before the next one starts; failures (transport, extraction, or the
/// item's own write) are recorded in the report and processing continues.
/// The delay is skipped after the last item.
pub async fn run_batch(
    client: &Client,
    origin: &str,
    work_ids: &[String],
    delay: Duration,
    output_dir: &Path,
) -> BatchReport {
    let started_at = chrono::Utc::now();
    let timer = Instant::now();
    let mut outcomes = Vec::with_capacity(work_ids.len());

    tracing::info!("Starting batch of {} works", work_ids.len());

    for (index, work_id) in work_ids.iter().enumerate() {
        tracing::info!("[{}/{}] work {}", index + 1, work_ids.len(), work_id);

        let outcome = match fetch_work(client, origin, work_id).await {
            Ok(work) => {
                let path = output::record_path(output_dir, work_id);
                match output::write_record(&work, &path) {
                    Ok(()) => {
                        tracing::info!("  ok: {}", work.title);
                        ItemOutcome::success(work_id, &work.title)
                    }
                    Err(e) => {
                        tracing::warn!("  write failed for {}: {}", work_id, e);
                        ItemOutcome::failure(work_id, e.to_string())
                    }
                }
            }
            Err(e) => {
                tracing::warn!("  failed: {}", e);
                ItemOutcome::failure(work_id, e.to_string())
            }
        };
        outcomes.push(outcome);

        // Politeness throttle between works, not after the last one
        if index + 1 < work_ids.len() {
            tokio::time::sleep(delay).await;
        }
    }

    let succeeded = outcomes
        .iter()
        .filter(|o| o.status == crate::model::OutcomeStatus::Success)
        .count();

    BatchReport {
        total: work_ids.len(),
        succeeded,
        failed: work_ids.len() - succeeded,
        elapsed_seconds: timer.elapsed().as_secs_f64(),
        started_at,
        finished_at: chrono::Utc::now(),
        outcomes,
    }
}

/// Loads a work-id list file: one id per line, blank lines skipped
pub fn load_work_ids(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
