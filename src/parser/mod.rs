//! Log parsing and schema definitions.
//!
//! This module handles:
//! - Classifying raw JSONL lines into record kinds
//! - Defining the raw record shapes
//! - Defining the reconstructed trace document
//! - The top-level parse entry point

pub mod classifier;
pub mod lenient;
pub mod records;
pub mod rlm_log;
pub mod schema;

// Re-export main types
pub use classifier::{classify_line, SkippedLine};
pub use records::{LogRecord, RecordKind};
pub use rlm_log::{
    parse_log_file, parse_log_file_with_path, parse_with_diagnostics, ParseOutcome,
};
pub use schema::{
    CodeBlock, FinalAnswer, LogSummary, PromptMessage, ReplResult, RlmConfig, RlmIteration,
    RlmLogFile, Role, SubLmCall,
};
