//! RLM Trace Studio CLI
//!
//! Parses recursive language model trace logs and prints or exports the
//! reconstructed trace.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use rlm_trace_studio::commands::{
    display_schema, display_version, execute_export, execute_inspect, execute_scan,
    validate_report_file, ExportArgs, InspectArgs, ScanArgs,
};
use rlm_trace_studio::utils::config::DEFAULT_TRACE_EXTENSION;

/// RLM Trace Studio - Inspect recursive language model traces
#[derive(Parser, Debug)]
#[command(name = "rlm-trace")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a trace log and print its summary
    Inspect {
        /// Path or http(s) URL of the JSONL log
        source: String,

        /// Print one line per iteration
        #[arg(short, long)]
        iterations: bool,

        /// Print sub-LM call breakdown statistics
        #[arg(short, long)]
        stats: bool,
    },

    /// Parse a trace log and write the JSON report
    Export {
        /// Path or http(s) URL of the JSONL log
        source: String,

        /// Output path for the JSON report
        #[arg(short, long, default_value = "trace.json")]
        output: PathBuf,
    },

    /// Summarize every trace log in a directory
    Scan {
        /// Directory to scan
        #[arg(default_value = ".")]
        dir: PathBuf,

        /// File extension to match
        #[arg(long, default_value = DEFAULT_TRACE_EXTENSION, env = "RLM_TRACE_EXT")]
        ext: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Inspect {
            source,
            iterations,
            stats,
        } => {
            execute_inspect(&InspectArgs {
                source,
                show_iterations: iterations,
                show_stats: stats,
            })?;
        }

        Commands::Export { source, output } => {
            execute_export(&ExportArgs {
                source,
                output_json: output,
            })?;
        }

        Commands::Scan {
            dir,
            ext,
            recursive,
        } => {
            execute_scan(&ScanArgs {
                dir,
                extension: ext,
                recursive,
            })?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
