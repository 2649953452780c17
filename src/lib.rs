//! RLM Trace Studio
//!
//! Reconstruction of recursive language model (RLM) execution traces from
//! JSONL logs into a single queryable document with summary statistics.
//!
//! The core entry point is [`parser::parse_log_file`]:
//!
//! ```
//! use rlm_trace_studio::parser::parse_log_file;
//!
//! let text = r#"{"type":"iteration","iteration":1,"response":"hello","final_answer":"done"}"#;
//! let trace = parse_log_file(text, "run.jsonl");
//! assert_eq!(trace.metadata.total_iterations, 1);
//! ```
//!
//! This crate also provides the `rlm-trace` CLI tool.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod source;
pub mod utils;
