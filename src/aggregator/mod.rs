//! Aggregation of classified records into a trace document.
//!
//! This module transforms the classified record stream into:
//! - Reconstructed iterations with prompt snapshots (trace builder)
//! - Summary totals stored on the document
//! - Breakdown statistics for reporting

pub mod metrics;
pub mod trace_builder;

// Re-export main types and functions
pub use metrics::{calculate_trace_statistics, summarize, SlowestBlock, TraceStatistics};
pub use trace_builder::{build_trace, TraceBuilder};
