//! Stateful fold from classified records to a trace document.
//!
//! The builder carries the most recent configuration and initial prompt
//! across records. Each iteration record is normalized on arrival and gets
//! its own copy of the prompt in effect at that moment.

use super::metrics::summarize;
use crate::parser::records::{
    InitialPromptRecord, IterationRecord, LogRecord, MetadataRecord, RawCodeBlock,
};
use crate::parser::schema::{
    CodeBlock, FinalAnswer, PromptMessage, ReplResult, RlmConfig, RlmIteration, RlmLogFile,
};
use log::{debug, warn};
use serde_json::Value;

/// Running state of the fold
#[derive(Debug, Clone, Default)]
pub struct TraceBuilder {
    config: Option<RlmConfig>,
    prompt: Vec<PromptMessage>,
    iterations: Vec<RlmIteration>,
}

impl TraceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record in file order
    pub fn push(&mut self, record: LogRecord) {
        match record {
            LogRecord::Metadata(metadata) => self.apply_metadata(metadata),
            LogRecord::InitialPrompt(prompt) => self.apply_initial_prompt(prompt),
            LogRecord::Iteration(iteration) => self.apply_iteration(iteration),
        }
    }

    /// Number of iterations emitted so far
    pub fn iteration_count(&self) -> usize {
        self.iterations.len()
    }

    /// Assemble the document
    ///
    /// **Public** - consumes the builder; the result is never mutated again
    pub fn finish(self, file_name: impl Into<String>, file_path: impl Into<String>) -> RlmLogFile {
        let metadata = summarize(&self.iterations, &self.prompt);
        let config = self.config.unwrap_or_else(|| {
            debug!("No metadata record seen, using fallback configuration");
            RlmConfig::fallback()
        });

        RlmLogFile {
            file_name: file_name.into(),
            file_path: file_path.into(),
            iterations: self.iterations,
            metadata,
            config,
        }
    }

    fn apply_metadata(&mut self, record: MetadataRecord) {
        // Last one wins, including a metadata record without a config
        self.config = record.config;
    }

    fn apply_initial_prompt(&mut self, record: InitialPromptRecord) {
        self.prompt = record.prompt.unwrap_or_default();
    }

    fn apply_iteration(&mut self, record: IterationRecord) {
        let index = record.iteration.unwrap_or_default();

        let code_blocks: Vec<CodeBlock> = record
            .code_blocks
            .unwrap_or_default()
            .into_iter()
            .map(normalize_code_block)
            .collect();

        // Fold from +0.0 so an iteration without code reports 0, not -0
        let iteration_time = code_blocks
            .iter()
            .fold(0.0, |total, block| total + block.result.execution_time);

        self.iterations.push(RlmIteration {
            iteration: index,
            timestamp: record.timestamp.unwrap_or_default(),
            prompt: self.prompt.clone(),
            response: record.response.unwrap_or_default(),
            code_blocks,
            final_answer: normalize_final_answer(index, record.final_answer),
            iteration_time,
        });
    }
}

/// Fold an ordered record sequence into a trace document
///
/// **Public** - the builder entry point for callers holding records directly
pub fn build_trace<I>(records: I, file_name: &str, file_path: &str) -> RlmLogFile
where
    I: IntoIterator<Item = LogRecord>,
{
    records
        .into_iter()
        .fold(TraceBuilder::new(), |mut builder, record| {
            builder.push(record);
            builder
        })
        .finish(file_name, file_path)
}

/// Fill every missing result field with its empty value
///
/// **Private** - each field is defaulted independently
fn normalize_code_block(raw: RawCodeBlock) -> CodeBlock {
    let result = raw.result.unwrap_or_default();

    CodeBlock {
        code: raw.code.unwrap_or_default(),
        result: ReplResult {
            stdout: result.stdout.unwrap_or_default(),
            stderr: result.stderr.unwrap_or_default(),
            locals: result.locals.unwrap_or_default(),
            execution_time: result.execution_time.unwrap_or_default(),
            rlm_calls: result.rlm_calls.unwrap_or_default(),
        },
    }
}

/// Accept a string or a pair of strings; flag anything else and drop it
///
/// **Private** - internal helper for apply_iteration
fn normalize_final_answer(index: i64, raw: Option<Value>) -> Option<FinalAnswer> {
    match raw? {
        Value::Null => None,
        Value::String(answer) => Some(FinalAnswer::Single(answer)),
        Value::Array(parts) => match <[Value; 2]>::try_from(parts) {
            Ok([Value::String(primary), Value::String(supporting)]) => {
                Some(FinalAnswer::Pair([primary, supporting]))
            }
            Ok(pair) => {
                warn!(
                    "Iteration {}: final_answer pair must hold two strings, got {:?}; treating as null",
                    index, pair
                );
                None
            }
            Err(parts) => {
                warn!(
                    "Iteration {}: final_answer has {} parts, expected 2; treating as null",
                    index,
                    parts.len()
                );
                None
            }
        },
        other => {
            warn!(
                "Iteration {}: unsupported final_answer {}; treating as null",
                index, other
            );
            None
        }
    }
}
