//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Stage progress logs at `info`, per-row detail at `debug`. Specimen ids are
//! operational identifiers, not subject data, so they may appear in logs.

use std::io::{self, IsTerminal};

use anyhow::anyhow;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter (error, warn, info, debug, trace).
    pub level_filter: LevelFilter,
    /// Honor `RUST_LOG` when no explicit verbosity was given.
    pub use_env_filter: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level_filter: LevelFilter::INFO,
            use_env_filter: true,
        }
    }
}

/// Initialize the global tracing subscriber. Call once, before any pipeline
/// work.
pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow!("failed to set tracing subscriber: {error}"))
}
