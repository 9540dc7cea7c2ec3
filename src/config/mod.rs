//! Configuration module for ao3-fetch
//!
//! Handles loading, parsing, and validating the optional TOML
//! configuration file. Every setting has a default, so the CLI works
//! without any config file at all.
//!
//! # Example
//!
//! ```no_run
//! use ao3_fetch::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("ao3-fetch.toml")).unwrap();
//! println!("Batch delay: {}s", config.batch.delay);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BatchConfig, Config, FetcherConfig, OutputConfig, SearchConfig};

// Re-export parser functions
pub use parser::load_config;
