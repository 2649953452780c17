//! Plain-text rendering of traces for the terminal.

use crate::aggregator::TraceStatistics;
use crate::parser::schema::{RlmIteration, RlmLogFile};
use crate::utils::config::PREVIEW_WIDTH;

/// Cut text to `width` characters, appending "..." when shortened
pub fn preview(text: &str, width: usize) -> String {
    let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if single_line.chars().count() <= width {
        return single_line;
    }
    let cut: String = single_line.chars().take(width).collect();
    format!("{}...", cut)
}

/// Render the header block: config, totals, question, answer
pub fn render_summary(trace: &RlmLogFile, stats: Option<&TraceStatistics>) -> String {
    let summary = &trace.metadata;
    let mut out = String::new();

    out.push_str(&format!("Trace:          {}\n", trace.file_path));
    out.push_str(&format!(
        "Model:          {} / {} (max depth {})\n",
        trace.config.root_model, trace.config.backend, trace.config.max_depth
    ));
    out.push_str(&format!("Iterations:     {}\n", summary.total_iterations));
    out.push_str(&format!("Code blocks:    {}\n", summary.total_code_blocks));
    out.push_str(&format!("Sub-LM calls:   {}\n", summary.total_sub_lm_calls));
    out.push_str(&format!(
        "Execution time: {:.2}s\n",
        summary.total_execution_time
    ));

    if !summary.context_question.is_empty() {
        out.push_str(&format!(
            "Question:       {}\n",
            preview(&summary.context_question, PREVIEW_WIDTH)
        ));
    }
    if let Some(answer) = &summary.final_answer {
        out.push_str(&format!("Final answer:   {}\n", answer));
    }
    if let Some(stats) = stats {
        out.push_str(&format!("{}\n", stats.summary()));
    }

    out
}

/// One line per iteration, in trace order
pub fn render_iterations(iterations: &[RlmIteration]) -> String {
    iterations
        .iter()
        .enumerate()
        .map(|(position, it)| {
            let marker = if it.is_final() { "*" } else { " " };
            format!(
                "{}{:>4} #{:<4} {:>2} code {:>2} sub  {:>7.2}s  {}\n",
                marker,
                position + 1,
                it.iteration,
                it.code_blocks.len(),
                it.sub_calls().count(),
                it.iteration_time,
                preview(&it.response, 80)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_log_file;

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("a\n  b", 10), "a b");
        assert_eq!(preview("abcdefghij", 4), "abcd...");
    }

    #[test]
    fn test_render_summary() {
        let text = [
            r#"{"type":"metadata","config":{"root_model":"gpt-4o","max_depth":2,"backend":"openai"}}"#,
            r#"{"type":"initial_prompt","prompt":[{"role":"user","content":"What is 2+2?"}]}"#,
            r#"{"type":"iteration","iteration":1,"final_answer":["4","arithmetic"]}"#,
        ]
        .join("\n");
        let trace = parse_log_file(&text, "run.jsonl");

        let rendered = render_summary(&trace, None);

        assert!(rendered.contains("gpt-4o / openai (max depth 2)"));
        assert!(rendered.contains("Question:       What is 2+2?"));
        assert!(rendered.contains("Final answer:   4 | arithmetic"));
        assert!(rendered.contains("Execution time: 0.00s"));
    }

    #[test]
    fn test_render_iterations_marks_final() {
        let text = [
            r#"{"type":"iteration","iteration":1,"response":"thinking"}"#,
            r#"{"type":"iteration","iteration":2,"response":"done","final_answer":"x"}"#,
        ]
        .join("\n");
        let trace = parse_log_file(&text, "run.jsonl");

        let rendered = render_iterations(&trace.iterations);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with(' '));
        assert!(lines[1].starts_with('*'));
        assert!(lines[1].ends_with("done"));
    }
}
