//! Summary totals and breakdown statistics for reconstructed traces.
//!
//! `summarize` produces the totals stored on the document itself.
//! `calculate_trace_statistics` derives additional breakdowns from a
//! finished document for reporting; it never feeds back into the summary.

use crate::parser::schema::{LogSummary, PromptMessage, RlmIteration, RlmLogFile, Role};
use log::debug;
use std::collections::BTreeMap;

/// Compute the document summary
///
/// **Public** - called by the trace builder once the fold is complete
///
/// # Arguments
/// * `iterations` - All reconstructed iterations, in file order
/// * `prompt` - The initial prompt state at the end of the fold
pub fn summarize(iterations: &[RlmIteration], prompt: &[PromptMessage]) -> LogSummary {
    let total_code_blocks: usize = iterations.iter().map(|it| it.code_blocks.len()).sum();
    let total_sub_lm_calls: usize = iterations.iter().map(|it| it.sub_calls().count()).sum();
    let total_execution_time = iterations
        .iter()
        .fold(0.0, |total, it| total + it.iteration_time);

    let context_question = prompt
        .iter()
        .find(|message| message.role == Role::User)
        .map(|message| message.content.clone())
        .unwrap_or_default();

    let final_answer = iterations.last().and_then(|it| it.final_answer.clone());

    debug!(
        "Summarized {} iterations, {} code blocks, {} sub-LM calls",
        iterations.len(),
        total_code_blocks,
        total_sub_lm_calls
    );

    LogSummary {
        total_iterations: iterations.len(),
        total_code_blocks,
        total_sub_lm_calls,
        total_execution_time,
        context_question,
        final_answer,
    }
}

/// Location and duration of the slowest code block in a trace
#[derive(Debug, Clone, PartialEq)]
pub struct SlowestBlock {
    /// Position in the iteration list (not the logged step number)
    pub iteration_position: usize,

    /// Logged step number of that iteration
    pub iteration: i64,

    /// Position of the block within its iteration
    pub block_position: usize,

    /// Seconds
    pub execution_time: f64,
}

/// Breakdown statistics over a finished trace
///
/// **Public** - returned from calculate_trace_statistics
#[derive(Debug, Clone, Default)]
pub struct TraceStatistics {
    /// Sub-LM calls keyed by recursion depth
    pub calls_by_depth: BTreeMap<u32, usize>,

    /// Sub-LM calls keyed by model identifier
    pub calls_by_model: BTreeMap<String, usize>,

    /// Seconds spent inside sub-LM calls
    pub total_sub_call_time: f64,

    /// Deepest recursion level reached by any sub-LM call
    pub max_observed_depth: u32,

    /// Iterations that carry a final answer
    pub final_iterations: usize,

    pub slowest_block: Option<SlowestBlock>,
}

impl TraceStatistics {
    /// Get human-readable summary
    ///
    /// **Public** - for logging and the inspect command
    pub fn summary(&self) -> String {
        let depths = self
            .calls_by_depth
            .iter()
            .map(|(depth, count)| format!("d{}={}", depth, count))
            .collect::<Vec<_>>()
            .join(" ");

        format!(
            "Sub-LM time: {:.2}s | Max depth: {} | By depth: [{}] | Final iterations: {}",
            self.total_sub_call_time, self.max_observed_depth, depths, self.final_iterations
        )
    }
}

/// Calculate breakdown statistics for a trace
///
/// **Public** - provides reporting detail beyond the stored summary
pub fn calculate_trace_statistics(trace: &RlmLogFile) -> TraceStatistics {
    let mut stats = TraceStatistics::default();

    for (position, iteration) in trace.iterations.iter().enumerate() {
        if iteration.is_final() {
            stats.final_iterations += 1;
        }

        for (block_position, block) in iteration.code_blocks.iter().enumerate() {
            let time = block.result.execution_time;
            let is_slower = stats
                .slowest_block
                .as_ref()
                .map_or(true, |slowest| time > slowest.execution_time);

            if is_slower {
                stats.slowest_block = Some(SlowestBlock {
                    iteration_position: position,
                    iteration: iteration.iteration,
                    block_position,
                    execution_time: time,
                });
            }
        }

        for call in iteration.sub_calls() {
            *stats.calls_by_depth.entry(call.depth).or_insert(0) += 1;
            *stats.calls_by_model.entry(call.model.clone()).or_insert(0) += 1;
            stats.total_sub_call_time += call.execution_time;
            stats.max_observed_depth = stats.max_observed_depth.max(call.depth);
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{CodeBlock, FinalAnswer, ReplResult, SubLmCall};

    fn call(model: &str, depth: u32, seconds: f64) -> SubLmCall {
        SubLmCall {
            model: model.to_string(),
            prompt: String::new(),
            response: String::new(),
            depth,
            execution_time: seconds,
        }
    }

    fn block(seconds: f64, calls: Vec<SubLmCall>) -> CodeBlock {
        CodeBlock {
            code: String::new(),
            result: ReplResult {
                execution_time: seconds,
                rlm_calls: calls,
                ..Default::default()
            },
        }
    }

    fn iteration(index: i64, blocks: Vec<CodeBlock>, answer: Option<&str>) -> RlmIteration {
        RlmIteration {
            iteration: index,
            timestamp: String::new(),
            prompt: Vec::new(),
            response: String::new(),
            iteration_time: blocks.iter().map(|b| b.result.execution_time).sum(),
            code_blocks: blocks,
            final_answer: answer.map(|a| FinalAnswer::Single(a.to_string())),
        }
    }

    #[test]
    fn test_summarize_totals() {
        let iterations = vec![
            iteration(1, vec![block(0.5, vec![call("mini", 1, 0.1)])], Some("early")),
            iteration(
                2,
                vec![
                    block(0.25, vec![]),
                    block(0.25, vec![call("mini", 1, 0.1), call("mini", 2, 0.1)]),
                ],
                Some("129"),
            ),
        ];

        let summary = summarize(&iterations, &[]);

        assert_eq!(summary.total_iterations, 2);
        assert_eq!(summary.total_code_blocks, 3);
        assert_eq!(summary.total_sub_lm_calls, 3);
        assert_eq!(summary.total_execution_time, 1.0);
        assert_eq!(summary.final_answer, Some(FinalAnswer::Single("129".to_string())));
    }

    #[test]
    fn test_summarize_final_answer_from_last_only() {
        let iterations = vec![iteration(1, vec![], Some("done")), iteration(2, vec![], None)];
        let summary = summarize(&iterations, &[]);
        assert!(summary.final_answer.is_none());
    }

    #[test]
    fn test_context_question_is_first_user_message() {
        let prompt = vec![
            PromptMessage {
                role: Role::System,
                content: "be brief".to_string(),
            },
            PromptMessage {
                role: Role::User,
                content: "first".to_string(),
            },
            PromptMessage {
                role: Role::User,
                content: "second".to_string(),
            },
        ];

        assert_eq!(summarize(&[], &prompt).context_question, "first");
        assert_eq!(summarize(&[], &prompt[..1]).context_question, "");
    }

    #[test]
    fn test_trace_statistics() {
        let iterations = vec![
            iteration(1, vec![block(0.5, vec![call("mini", 1, 0.25)])], None),
            iteration(
                3,
                vec![block(0.75, vec![call("mini", 2, 0.5), call("big", 1, 0.25)])],
                Some("x"),
            ),
        ];
        let trace = RlmLogFile {
            file_name: "t".to_string(),
            file_path: "t".to_string(),
            metadata: summarize(&iterations, &[]),
            iterations,
            config: crate::parser::schema::RlmConfig::fallback(),
        };

        let stats = calculate_trace_statistics(&trace);

        assert_eq!(stats.calls_by_depth.get(&1), Some(&2));
        assert_eq!(stats.calls_by_depth.get(&2), Some(&1));
        assert_eq!(stats.calls_by_model.get("mini"), Some(&2));
        assert_eq!(stats.total_sub_call_time, 1.0);
        assert_eq!(stats.max_observed_depth, 2);
        assert_eq!(stats.final_iterations, 1);

        let slowest = stats.slowest_block.unwrap();
        assert_eq!(slowest.iteration_position, 1);
        assert_eq!(slowest.iteration, 3);
        assert_eq!(slowest.block_position, 0);
    }

    #[test]
    fn test_trace_statistics_empty() {
        let trace = crate::aggregator::TraceBuilder::new().finish("e", "e");
        let stats = calculate_trace_statistics(&trace);

        assert!(stats.calls_by_depth.is_empty());
        assert!(stats.slowest_block.is_none());
        assert_eq!(
            stats.summary(),
            "Sub-LM time: 0.00s | Max depth: 0 | By depth: [] | Final iterations: 0"
        );
    }
}
