//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Why a single log line was skipped by the record classifier.
///
/// Both kinds are advisory: the parse continues with the next line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// Not valid JSON, or a known record kind whose fields have unusable types
    #[error("{0}")]
    Malformed(String),

    /// Valid JSON without a recognised `type` discriminator
    #[error("{0}")]
    Unrecognized(String),
}

impl RecordError {
    pub fn invalid_json() -> Self {
        Self::Malformed("invalid JSON".to_string())
    }

    pub fn missing_type() -> Self {
        Self::Unrecognized("missing type field".to_string())
    }

    pub fn unknown_type(kind: &str) -> Self {
        Self::Unrecognized(format!("unknown entry type \"{}\"", kind))
    }
}

/// Errors that can occur while acquiring raw trace text
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    #[error("Failed to walk directory: {0}")]
    WalkFailed(#[from] walkdir::Error),

    #[error("Not a directory: {0}")]
    NotADirectory(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
