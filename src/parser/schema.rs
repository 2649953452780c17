//! Trace document schema.
//!
//! These are the normalized, fully-defaulted shapes produced by the trace
//! builder and consumed read-only by everything downstream (CLI output,
//! JSON export). Iteration-level field names follow the on-disk log format;
//! document-level names are camelCase.

use crate::utils::config::{
    ANSWER_PAIR_SEPARATOR, FALLBACK_BACKEND, FALLBACK_MAX_DEPTH, FALLBACK_ROOT_MODEL,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Speaker of a prompt message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message of the conversation handed to the root model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptMessage {
    pub role: Role,

    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub content: String,
}

/// A nested model invocation issued from executed code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubLmCall {
    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub model: String,

    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub prompt: String,

    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub response: String,

    /// 1 = first level below the root loop
    #[serde(default, deserialize_with = "crate::parser::lenient::lenient_u32")]
    pub depth: u32,

    /// Seconds
    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub execution_time: f64,
}

/// Captured outcome of running one code block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplResult {
    pub stdout: String,
    pub stderr: String,

    /// Local scope snapshot after execution
    pub locals: serde_json::Map<String, serde_json::Value>,

    /// Seconds
    pub execution_time: f64,

    pub rlm_calls: Vec<SubLmCall>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    pub code: String,
    pub result: ReplResult,
}

/// Final answer of an iteration: a single string, or exactly two parts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FinalAnswer {
    Single(String),
    Pair([String; 2]),
}

impl fmt::Display for FinalAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalAnswer::Single(answer) => f.write_str(answer),
            FinalAnswer::Pair([primary, supporting]) => {
                write!(f, "{}{}{}", primary, ANSWER_PAIR_SEPARATOR, supporting)
            }
        }
    }
}

/// One reasoning step of the root loop, normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RlmIteration {
    /// Step number as logged; not checked for contiguity
    pub iteration: i64,

    pub timestamp: String,

    /// Prompt in effect when this iteration was recorded (owned copy)
    pub prompt: Vec<PromptMessage>,

    pub response: String,

    pub code_blocks: Vec<CodeBlock>,

    pub final_answer: Option<FinalAnswer>,

    /// Sum of the code blocks' execution times, in seconds
    pub iteration_time: f64,
}

impl RlmIteration {
    /// Whether this iteration produced a final answer
    pub fn is_final(&self) -> bool {
        self.final_answer.is_some()
    }

    /// All nested model calls across this iteration's code blocks, in block order
    pub fn sub_calls(&self) -> impl Iterator<Item = &SubLmCall> {
        self.code_blocks
            .iter()
            .flat_map(|block| block.result.rlm_calls.iter())
    }
}

/// Run configuration from the `metadata` record.
///
/// The three named fields are always present; anything else the logger
/// wrote is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RlmConfig {
    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub root_model: String,

    #[serde(default, deserialize_with = "crate::parser::lenient::lenient_u32")]
    pub max_depth: u32,

    #[serde(default, deserialize_with = "crate::parser::lenient::null_as_default")]
    pub backend: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl RlmConfig {
    /// Configuration reported when a trace carries no metadata record
    pub fn fallback() -> Self {
        Self {
            root_model: FALLBACK_ROOT_MODEL.to_string(),
            max_depth: FALLBACK_MAX_DEPTH,
            backend: FALLBACK_BACKEND.to_string(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Totals computed alongside the iteration list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogSummary {
    pub total_iterations: usize,

    pub total_code_blocks: usize,

    #[serde(rename = "totalSubLMCalls")]
    pub total_sub_lm_calls: usize,

    /// Sum of iteration times, in seconds
    pub total_execution_time: f64,

    /// First user message of the initial prompt, or empty
    pub context_question: String,

    /// Final answer of the last iteration only
    pub final_answer: Option<FinalAnswer>,
}

/// The reconstructed trace for one log file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RlmLogFile {
    pub file_name: String,
    pub file_path: String,
    pub iterations: Vec<RlmIteration>,
    pub metadata: LogSummary,
    pub config: RlmConfig,
}
