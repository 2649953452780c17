//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod scan;
pub mod utils;

// Re-export main command functions
pub use inspect::{execute_export, execute_inspect, load_trace, validate_source};
pub use models::{ExportArgs, InspectArgs, ScanArgs};
pub use scan::{execute_scan, scan_traces, ScanEntry};
pub use utils::{display_schema, display_version, validate_report_file};
