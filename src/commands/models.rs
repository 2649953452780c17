use crate::utils::config::DEFAULT_TRACE_EXTENSION;
use std::path::PathBuf;

/// Arguments for the inspect command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct InspectArgs {
    /// Local path or http(s) URL of the log
    pub source: String,

    /// Print one line per iteration
    pub show_iterations: bool,

    /// Print breakdown statistics
    pub show_stats: bool,
}

/// Arguments for the export command
#[derive(Debug, Clone)]
pub struct ExportArgs {
    /// Local path or http(s) URL of the log
    pub source: String,

    /// Output path for the JSON report
    pub output_json: PathBuf,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            source: String::new(),
            output_json: PathBuf::from("trace.json"),
        }
    }
}

/// Arguments for the scan command
#[derive(Debug, Clone)]
pub struct ScanArgs {
    /// Directory holding trace logs
    pub dir: PathBuf,

    /// File extension to match (without the dot)
    pub extension: String,

    /// Descend into subdirectories
    pub recursive: bool,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extension: DEFAULT_TRACE_EXTENSION.to_string(),
            recursive: false,
        }
    }
}
