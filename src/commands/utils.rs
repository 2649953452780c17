use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a trace report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;
    let summary = &report.trace.metadata;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Trace: {}", report.trace.file_path);
    println!("  Iterations: {}", summary.total_iterations);
    println!("  Code Blocks: {}", summary.total_code_blocks);
    println!("  Sub-LM Calls: {}", summary.total_sub_lm_calls);
    println!("  Execution Time: {:.2}s", summary.total_execution_time);

    if report.trace.iterations.len() != summary.total_iterations {
        anyhow::bail!(
            "Iteration count mismatch: {} iterations, summary says {}",
            report.trace.iterations.len(),
            summary.total_iterations
        );
    }

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("RLM Trace Studio Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string             - Schema version (e.g., '1.0.0')");
        println!("  generated_at: string        - ISO 8601 timestamp");
        println!("  trace: object               - Reconstructed trace");
        println!("    fileName / filePath       - Log identity");
        println!("    config: object            - root_model, max_depth, backend, extra fields");
        println!("    metadata: object          - Summary totals");
        println!("      totalIterations: number");
        println!("      totalCodeBlocks: number");
        println!("      totalSubLMCalls: number");
        println!("      totalExecutionTime: number (seconds)");
        println!("      contextQuestion: string");
        println!("      finalAnswer: string | [string, string] | null");
        println!("    iterations: array         - One entry per iteration record");
        println!("      iteration, timestamp, prompt, response, code_blocks,");
        println!("      final_answer, iteration_time");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("RLM Trace Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Reconstruction and inspection of recursive language model traces.");
}
