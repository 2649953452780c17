//! Raw record kinds as they appear on individual log lines.
//!
//! These mirror the logger's output loosely: nearly every field is optional
//! so that a record is accepted as long as its `type` is known. Defaults are
//! applied later by the trace builder, not here.

use super::schema::{PromptMessage, RlmConfig, SubLmCall};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Discriminator values understood by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Metadata,
    InitialPrompt,
    Iteration,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Metadata => "metadata",
            RecordKind::InitialPrompt => "initial_prompt",
            RecordKind::Iteration => "iteration",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "metadata" => Ok(RecordKind::Metadata),
            "initial_prompt" => Ok(RecordKind::InitialPrompt),
            "iteration" => Ok(RecordKind::Iteration),
            _ => Err(()),
        }
    }
}

/// `{"type": "metadata", "config": {...}}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetadataRecord {
    #[serde(default)]
    pub config: Option<RlmConfig>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `{"type": "initial_prompt", "prompt": [...]}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InitialPromptRecord {
    #[serde(default)]
    pub prompt: Option<Vec<PromptMessage>>,

    #[serde(default)]
    pub timestamp: Option<String>,
}

/// `{"type": "iteration", ...}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IterationRecord {
    /// Any JSON number is accepted; see `lenient_i64`
    #[serde(default, deserialize_with = "super::lenient::lenient_i64")]
    pub iteration: Option<i64>,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub response: Option<String>,

    #[serde(default)]
    pub code_blocks: Option<Vec<RawCodeBlock>>,

    /// Kept untyped; the builder decides which shapes are usable
    #[serde(default)]
    pub final_answer: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCodeBlock {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub result: Option<RawReplResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawReplResult {
    #[serde(default)]
    pub stdout: Option<String>,

    #[serde(default)]
    pub stderr: Option<String>,

    #[serde(default)]
    pub locals: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default)]
    pub execution_time: Option<f64>,

    #[serde(default)]
    pub rlm_calls: Option<Vec<SubLmCall>>,
}

/// A classified log line
#[derive(Debug, Clone)]
pub enum LogRecord {
    Metadata(MetadataRecord),
    InitialPrompt(InitialPromptRecord),
    Iteration(IterationRecord),
}

impl LogRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LogRecord::Metadata(_) => RecordKind::Metadata,
            LogRecord::InitialPrompt(_) => RecordKind::InitialPrompt,
            LogRecord::Iteration(_) => RecordKind::Iteration,
        }
    }
}
