//! Acquisition of raw trace text.
//!
//! The parser never performs I/O; this module reads logs from disk or over
//! HTTP, discovers log files in a directory, and checks whether a run
//! finished.

pub mod client;
pub mod discovery;

pub use client::{is_remote, url_file_name, FetchClient};
pub use discovery::{discover_traces, is_trace_complete};

use crate::parser::{parse_log_file_with_path, RlmLogFile};
use crate::utils::error::SourceError;
use log::debug;
use std::path::{Path, PathBuf};

/// Where a trace log comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceSource {
    Local(PathBuf),
    Remote(String),
}

impl TraceSource {
    /// Interpret a CLI argument as a URL or a path
    pub fn from_arg(arg: &str) -> Self {
        if is_remote(arg) {
            TraceSource::Remote(arg.to_string())
        } else {
            TraceSource::Local(PathBuf::from(arg))
        }
    }

    /// Identity label shown to users
    pub fn file_name(&self) -> String {
        match self {
            TraceSource::Local(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            TraceSource::Remote(url) => url_file_name(url),
        }
    }

    /// Full location of the log
    pub fn file_path(&self) -> String {
        match self {
            TraceSource::Local(path) => path.display().to_string(),
            TraceSource::Remote(url) => url.clone(),
        }
    }

    /// Read the whole log into memory
    pub fn read_text(&self) -> Result<String, SourceError> {
        match self {
            TraceSource::Local(path) => read_local(path),
            TraceSource::Remote(url) => FetchClient::new()?.fetch_text(url),
        }
    }
}

/// Load and parse a trace in one step
///
/// **Public** - convenience for commands
pub fn parse_log_source(source: &TraceSource) -> Result<RlmLogFile, SourceError> {
    let text = source.read_text()?;
    Ok(parse_log_file_with_path(
        &text,
        &source.file_name(),
        &source.file_path(),
    ))
}

fn read_local(path: &Path) -> Result<String, SourceError> {
    debug!("Reading trace log: {}", path.display());
    std::fs::read_to_string(path).map_err(|source| SourceError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_labels() {
        let local = TraceSource::from_arg("logs/run_01.jsonl");
        assert_eq!(local.file_name(), "run_01.jsonl");
        assert_eq!(local.file_path(), "logs/run_01.jsonl");

        let remote = TraceSource::from_arg("https://example.com/traces/run_02.jsonl");
        assert_eq!(remote.file_name(), "run_02.jsonl");
        assert_eq!(remote.file_path(), "https://example.com/traces/run_02.jsonl");
    }

    #[test]
    fn test_parse_local_source() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(
            file.path(),
            "{\"type\":\"iteration\",\"iteration\":1,\"final_answer\":\"ok\"}\n",
        )
        .unwrap();

        let source = TraceSource::Local(file.path().to_path_buf());
        let trace = parse_log_source(&source).unwrap();

        assert_eq!(trace.iterations.len(), 1);
        assert_eq!(trace.file_path, file.path().display().to_string());
        assert_ne!(trace.file_name, trace.file_path);
    }

    #[test]
    fn test_missing_local_file() {
        let source = TraceSource::from_arg("/definitely/not/here.jsonl");
        assert!(matches!(
            source.read_text(),
            Err(SourceError::ReadFailed { .. })
        ));
    }
}
