//! ao3-fetch: a polite single-site work fetcher
//!
//! This crate fetches fanfiction works from archiveofourown.org, extracts
//! title, author, and chapter content into structured records, and writes
//! them as JSON. A search-page identifier extractor and a fixed-delay
//! batch driver round out the tool.

pub mod batch;
pub mod config;
pub mod extract;
pub mod fetch;
pub mod model;
pub mod output;
pub mod search;
pub mod site;

use thiserror::Error;

/// Main error type for ao3-fetch operations
#[derive(Debug, Error)]
pub enum Ao3Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Network-level failures from the page fetcher
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("Request timeout for {url}")]
    Timeout { url: String },

    #[error("Connection failed for {url}")]
    Connect { url: String },

    #[error("HTTP error for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
}

/// Failures to pull structured fields out of a fetched document
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No extractable content for work {work_id}: document has no title and no chapters")]
    NoContent { work_id: String },

    #[error("Cannot determine work id from input: {0}")]
    InvalidWorkInput(String),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for ao3-fetch operations
pub type Result<T> = std::result::Result<T, Ao3Error>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{BatchReport, Chapter, ItemOutcome, Work};
