//! Top-level parser for RLM JSONL logs.
//!
//! Splits the raw text into lines, classifies each one, and folds the
//! resulting records into a trace document. Skipped lines are reported
//! through the log and, on request, returned alongside the document.

use super::classifier::{classify_line, SkippedLine};
use super::schema::RlmLogFile;
use crate::aggregator::TraceBuilder;
use log::{debug, warn};

/// Parse result with the diagnostics collected along the way
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub trace: RlmLogFile,
    pub skipped: Vec<SkippedLine>,
}

/// Parse a complete log text into a trace document
///
/// **Public** - main entry point for parsing
///
/// # Arguments
/// * `text` - Entire JSONL log, already in memory
/// * `file_name` - Identity label; also used as the file path
///
/// # Returns
/// The reconstructed trace. Never fails: unusable lines are skipped and
/// missing records degrade to documented defaults.
pub fn parse_log_file(text: &str, file_name: &str) -> RlmLogFile {
    parse_log_file_with_path(text, file_name, file_name)
}

/// Parse with distinct file name and path
///
/// **Public** - for callers that know the real location of the log
pub fn parse_log_file_with_path(text: &str, file_name: &str, file_path: &str) -> RlmLogFile {
    parse_with_diagnostics(text, file_name, file_path).trace
}

/// Parse and also return every skipped line with its reason
///
/// **Public** - used by the inspect command to report skipped lines
pub fn parse_with_diagnostics(text: &str, file_name: &str, file_path: &str) -> ParseOutcome {
    debug!("Parsing RLM log: {}", file_path);

    let mut builder = TraceBuilder::new();
    let mut skipped = Vec::new();

    for (index, line) in text.lines().enumerate() {
        match classify_line(index + 1, line) {
            Ok(Some(record)) => builder.push(record),
            Ok(None) => {}
            Err(skip) => {
                warn!("{}, skipping", skip);
                skipped.push(skip);
            }
        }
    }

    debug!(
        "Parsed {} iterations from {} ({} lines skipped)",
        builder.iteration_count(),
        file_name,
        skipped.len()
    );

    ParseOutcome {
        trace: builder.finish(file_name, file_path),
        skipped,
    }
}
