//! Scan command: summarize every trace log in a directory.

use crate::commands::models::ScanArgs;
use crate::parser::parse_log_file_with_path;
use crate::source::{discover_traces, is_trace_complete, TraceSource};
use anyhow::{Context, Result};
use log::{info, warn};
use std::path::PathBuf;

/// One scanned log
#[derive(Debug, Clone, PartialEq)]
pub struct ScanEntry {
    pub path: PathBuf,
    pub iterations: usize,
    pub sub_lm_calls: usize,
    pub complete: bool,
}

/// Discover and summarize trace logs
///
/// **Public** - unreadable files are logged and left out
pub fn scan_traces(args: &ScanArgs) -> Result<Vec<ScanEntry>> {
    let paths = discover_traces(&args.dir, &args.extension, args.recursive)
        .with_context(|| format!("Failed to scan {}", args.dir.display()))?;

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let source = TraceSource::Local(path.clone());
        let text = match source.read_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        let trace = parse_log_file_with_path(&text, &source.file_name(), &source.file_path());
        entries.push(ScanEntry {
            path,
            iterations: trace.metadata.total_iterations,
            sub_lm_calls: trace.metadata.total_sub_lm_calls,
            complete: is_trace_complete(&text),
        });
    }

    Ok(entries)
}

/// Execute the scan command
///
/// **Public** - main entry point called from main.rs
pub fn execute_scan(args: &ScanArgs) -> Result<()> {
    let entries = scan_traces(args)?;
    info!("Found {} trace logs in {}", entries.len(), args.dir.display());

    for entry in &entries {
        println!(
            "{:<10} {:>4} iter {:>4} sub  {}",
            if entry.complete { "complete" } else { "running" },
            entry.iterations,
            entry.sub_lm_calls,
            entry.path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_scan_traces() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("done.jsonl"),
            "{\"type\":\"iteration\",\"iteration\":1,\"final_answer\":\"7\"}\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("open.jsonl"),
            "{\"type\":\"iteration\",\"iteration\":1,\"final_answer\":null}\n{\"type\":\"iteration\",\"iteration\":2,\"final_answer\":null}\n",
        )
        .unwrap();

        let args = ScanArgs {
            dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let entries = scan_traces(&args).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].complete);
        assert_eq!(entries[0].iterations, 1);
        assert!(!entries[1].complete);
        assert_eq!(entries[1].iterations, 2);
    }
}
