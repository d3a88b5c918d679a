//! CLI argument definitions for the specimen inventory feed.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

#[derive(Parser)]
#[command(
    name = "specimen-feed",
    version,
    about = "Reconcile specimen records into inventory feed partitions",
    long_about = "Reconcile accessioning, aliquot, quality-control, and status-update\n\
                  snapshots into the canonical inventory export, partitioned into four\n\
                  delivery cohorts. Validation is fail-fast per table."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Process one snapshot and deliver the four export partitions.
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory holding the four snapshot tables as JSON arrays.
    #[arg(value_name = "SNAPSHOT_DIR")]
    pub snapshot_dir: PathBuf,

    /// Delivery directory for the export artifacts (default: <SNAPSHOT_DIR>/export).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Artifact name prefix.
    #[arg(long = "prefix", default_value = feed_reconcile::DEFAULT_PREFIX)]
    pub prefix: String,

    /// Run timestamp as YYYYMMDD_HHMMSS (default: local wall clock).
    #[arg(long = "timestamp", value_name = "TS")]
    pub timestamp: Option<String>,

    /// Fail tables whose analysis types fall outside the enumerated domain.
    #[arg(long = "enforce-analysis-types")]
    pub enforce_analysis_types: bool,

    /// Fail tables whose specimen types fall outside the enumerated domain.
    #[arg(long = "enforce-specimen-types")]
    pub enforce_specimen_types: bool,
}
