//! Configuration and constants for the library and CLI.

use std::time::Duration;

/// Default timeout for fetching remote traces
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Fallback configuration used when a trace never carries a metadata record
pub const FALLBACK_ROOT_MODEL: &str = "unknown";
pub const FALLBACK_MAX_DEPTH: u32 = 0;
pub const FALLBACK_BACKEND: &str = "unknown";

/// Extension used when discovering trace files on disk
pub const DEFAULT_TRACE_EXTENSION: &str = "jsonl";

/// Width at which long text (questions, responses) is cut in summaries
pub const PREVIEW_WIDTH: usize = 120;

/// Separator used when rendering a two-part final answer
pub const ANSWER_PAIR_SEPARATOR: &str = " | ";
