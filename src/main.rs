//! ao3-fetch main entry point
//!
//! Command-line interface for fetching works from archiveofourown.org.

use ao3_fetch::config::{load_config, Config};
use ao3_fetch::fetch::build_http_client;
use ao3_fetch::{batch, output, search, site};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// ao3-fetch: a polite AO3 work fetcher
///
/// Fetches works from archiveofourown.org with all chapters in one
/// request, extracts title/author/chapter content, and writes one JSON
/// record per work.
#[derive(Parser, Debug)]
#[command(name = "ao3-fetch")]
#[command(version = "1.0.0")]
#[command(about = "Fetch AO3 works as structured JSON records", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (all settings have defaults)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory record files are written into (overrides config)
    #[arg(short, long, global = true, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch a single work and write ao3_{id}.json
    Work {
        /// Work id or full work URL
        work: String,
    },

    /// Walk search result pages and write work_ids.txt
    Search {
        /// Search/listing URL (overrides config)
        #[arg(long, value_name = "URL")]
        url: Option<String>,

        /// Maximum number of result pages to walk (overrides config)
        #[arg(long, value_name = "N")]
        max_pages: Option<u32>,
    },

    /// Fetch every work in the id list, with a delay between works
    Batch {
        /// Identifier list file, one id per line (overrides config)
        #[arg(long, value_name = "FILE")]
        ids: Option<PathBuf>,

        /// Seconds to wait between works (overrides config)
        #[arg(long, value_name = "SECS")]
        delay: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Load configuration; defaults apply when no file is given
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.directory));

    match cli.command {
        Commands::Work { work } => handle_work(&config, &work, &output_dir).await?,
        Commands::Search { url, max_pages } => {
            handle_search(&config, url, max_pages, &output_dir).await?
        }
        Commands::Batch { ids, delay } => handle_batch(&config, ids, delay, &output_dir).await?,
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("ao3_fetch=info,warn"),
            1 => EnvFilter::new("ao3_fetch=debug,info"),
            2 => EnvFilter::new("ao3_fetch=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the `work` subcommand: fetch one work, write one record
async fn handle_work(
    config: &Config,
    work_input: &str,
    output_dir: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let work_id = site::parse_work_input(work_input)?;
    let client = build_http_client(&config.fetcher)?;

    let work = batch::fetch_work(&client, site::SITE_ORIGIN, &work_id).await?;

    let path = output::record_path(output_dir, &work_id);
    output::write_record(&work, &path)?;

    println!("Title:    {}", work.title);
    println!("Author:   {}", work.author);
    println!(
        "Chapters: {}/{}{}",
        work.chapters_fetched,
        work.total_chapters,
        if work.is_partial() { " (partial)" } else { "" }
    );
    println!("Saved to: {}", path.display());

    Ok(())
}

/// Handles the `search` subcommand: walk result pages, collect work ids
async fn handle_search(
    config: &Config,
    url_override: Option<String>,
    max_pages_override: Option<u32>,
    output_dir: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let start_url = url_override.unwrap_or_else(|| config.search.url.clone());
    let max_pages = max_pages_override.unwrap_or(config.search.max_pages);
    let page_delay = Duration::from_secs(config.search.page_delay);

    let client = build_http_client(&config.fetcher)?;

    let outcome = search::collect_work_ids(&client, &start_url, max_pages, page_delay).await?;

    // A page failure ends the walk, but the ids collected before it are
    // still worth keeping; write the list before reporting the failure.
    let path = output_dir.join("work_ids.txt");
    output::write_id_list(&outcome.work_ids, &path)?;

    if let Some(total) = &outcome.total_reported {
        println!("Total works reported: {}", total);
    }
    println!(
        "Collected {} work ids across {} pages",
        outcome.work_ids.len(),
        outcome.pages_walked
    );
    if let Some(e) = &outcome.page_error {
        println!("Walk stopped early: {}", e);
    }
    println!("Saved to: {}", path.display());

    Ok(())
}

/// Handles the `batch` subcommand: fetch the whole id list, then the summary
async fn handle_batch(
    config: &Config,
    ids_override: Option<PathBuf>,
    delay_override: Option<u64>,
    output_dir: &std::path::Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let id_list_path = ids_override.unwrap_or_else(|| PathBuf::from(&config.batch.id_list));
    let delay = Duration::from_secs(delay_override.unwrap_or(config.batch.delay));

    let work_ids = batch::load_work_ids(&id_list_path)?;
    let client = build_http_client(&config.fetcher)?;

    let report = batch::run_batch(&client, site::SITE_ORIGIN, &work_ids, delay, output_dir).await;

    // Per-item failures are recorded in the report; a summary that cannot
    // be written is fatal.
    let summary_path = output_dir.join("batch_summary.json");
    output::write_record(&report, &summary_path)?;

    println!("Batch finished: {} ok, {} failed", report.succeeded, report.failed);
    for outcome in report.outcomes.iter().filter(|o| o.error.is_some()) {
        println!(
            "  failed {}: {}",
            outcome.work_id,
            outcome.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!("Summary saved to: {}", summary_path.display());

    Ok(())
}
