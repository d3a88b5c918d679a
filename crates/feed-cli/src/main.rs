//! Specimen inventory feed CLI.

use clap::Parser;
use feed_cli::logging::{LogConfig, init_logging};
use feed_cli::pipeline::{RunConfig, RunSummary, run};
use feed_transform::ValidationOptions;

mod cli;

use crate::cli::{Cli, Command, RunArgs};

fn main() {
    let cli = Cli::parse();
    let log_config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
    };
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Run(args) => match run(&run_config(&args)) {
            Ok(summary) => {
                print_summary(&summary);
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn run_config(args: &RunArgs) -> RunConfig {
    RunConfig {
        snapshot_dir: args.snapshot_dir.clone(),
        output_dir: args
            .output_dir
            .clone()
            .unwrap_or_else(|| args.snapshot_dir.join("export")),
        prefix: args.prefix.clone(),
        timestamp: args.timestamp.clone(),
        options: ValidationOptions {
            enforce_analysis_types: args.enforce_analysis_types,
            enforce_specimen_types: args.enforce_specimen_types,
        },
    }
}

fn print_summary(summary: &RunSummary) {
    println!("reconciled rows: {}", summary.reconciled_rows);
    for (name, rows) in &summary.partitions {
        println!("  {name}: {rows} rows");
    }
}
