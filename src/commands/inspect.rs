//! Inspect and export commands.
//!
//! Both commands:
//! 1. Acquire the raw log text (file or URL)
//! 2. Parse it into a trace document
//! 3. Print a summary or write a JSON report

use crate::aggregator::calculate_trace_statistics;
use crate::commands::models::{ExportArgs, InspectArgs};
use crate::output::{render_iterations, render_summary, write_report, TraceReport};
use crate::parser::{parse_with_diagnostics, ParseOutcome};
use crate::source::TraceSource;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: &InspectArgs) -> Result<()> {
    validate_source(&args.source)?;

    let outcome = load_trace(&args.source)?;
    let trace = &outcome.trace;

    let stats = args.show_stats.then(|| calculate_trace_statistics(trace));

    println!("{}", "=".repeat(80));
    print!("{}", render_summary(trace, stats.as_ref()));
    if !outcome.skipped.is_empty() {
        println!("Skipped lines:  {}", outcome.skipped.len());
    }
    println!("{}", "=".repeat(80));

    if args.show_iterations {
        print!("{}", render_iterations(&trace.iterations));
    }

    Ok(())
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
pub fn execute_export(args: &ExportArgs) -> Result<()> {
    validate_source(&args.source)?;

    let outcome = load_trace(&args.source)?;
    let report = TraceReport::new(outcome.trace);

    write_report(&report, &args.output_json).context("Failed to write trace report")?;
    info!("✓ Report written to: {}", args.output_json.display());

    Ok(())
}

/// Read and parse a log, logging timing and skipped-line counts
///
/// **Public** - shared by inspect and export
pub fn load_trace(source_arg: &str) -> Result<ParseOutcome> {
    let start_time = Instant::now();
    let source = TraceSource::from_arg(source_arg);

    info!("Loading trace: {}", source.file_path());
    let text = source
        .read_text()
        .with_context(|| format!("Failed to read trace {}", source.file_path()))?;

    let outcome = parse_with_diagnostics(&text, &source.file_name(), &source.file_path());

    if outcome.trace.iterations.is_empty() {
        warn!("No iterations found in {}", source.file_path());
    }
    if !outcome.skipped.is_empty() {
        warn!("{} lines skipped in {}", outcome.skipped.len(), source.file_path());
    }

    debug!(
        "Parsed {} iterations in {:.3}s",
        outcome.trace.metadata.total_iterations,
        start_time.elapsed().as_secs_f64()
    );

    Ok(outcome)
}

/// Validate a source argument before touching disk or network
///
/// **Public** - can be called for early validation
pub fn validate_source(source: &str) -> Result<()> {
    if source.trim().is_empty() {
        anyhow::bail!("Trace source cannot be empty");
    }

    if source.contains("://") && !crate::source::is_remote(source) {
        anyhow::bail!("Trace URL must start with http:// or https://");
    }

    Ok(())
}
