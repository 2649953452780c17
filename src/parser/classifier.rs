//! Record classifier.
//!
//! Turns one raw log line into a [`LogRecord`], or explains why the line
//! was skipped. Classification never looks at other lines.

use super::records::{LogRecord, RecordKind};
use crate::utils::error::RecordError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;

/// A line the classifier rejected
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedLine {
    /// 1-based
    pub line_number: usize,
    pub reason: RecordError,
}

impl fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line_number, self.reason)
    }
}

/// Classify a single log line
///
/// **Public** - used by the parse loop and by tooling that inspects lines
///
/// # Arguments
/// * `line_number` - 1-based position of the line, carried into diagnostics
/// * `line` - Raw line text
///
/// # Returns
/// * `Ok(None)` - blank line, nothing to do
/// * `Ok(Some(record))` - a record of one of the known kinds
/// * `Err(SkippedLine)` - the line should be skipped; its display text is
///   the diagnostic
pub fn classify_line(line_number: usize, line: &str) -> Result<Option<LogRecord>, SkippedLine> {
    classify(line).map_err(|reason| SkippedLine {
        line_number,
        reason,
    })
}

fn classify(line: &str) -> Result<Option<LogRecord>, RecordError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(line).map_err(|_| RecordError::invalid_json())?;

    let kind = match value.get("type") {
        Some(Value::String(kind)) => kind
            .parse::<RecordKind>()
            .map_err(|_| RecordError::unknown_type(kind))?,
        Some(other) => return Err(RecordError::unknown_type(&other.to_string())),
        None => return Err(RecordError::missing_type()),
    };

    let record = match kind {
        RecordKind::Metadata => LogRecord::Metadata(decode(kind, value)?),
        RecordKind::InitialPrompt => LogRecord::InitialPrompt(decode(kind, value)?),
        RecordKind::Iteration => LogRecord::Iteration(decode(kind, value)?),
    };

    Ok(Some(record))
}

/// Decode a typed record body
///
/// **Private** - only fails when a present field has an unusable JSON type
fn decode<T: DeserializeOwned>(kind: RecordKind, value: Value) -> Result<T, RecordError> {
    serde_json::from_value(value)
        .map_err(|e| RecordError::Malformed(format!("malformed {} record: {}", kind, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(line: &str) -> RecordError {
        classify_line(1, line).unwrap_err().reason
    }

    #[test]
    fn test_blank_line_is_silent() {
        assert!(matches!(classify_line(1, ""), Ok(None)));
        assert!(matches!(classify_line(2, "   \t "), Ok(None)));
    }

    #[test]
    fn test_invalid_json() {
        let err = reason("not valid json");
        assert_eq!(err, RecordError::invalid_json());
        assert_eq!(err.to_string(), "invalid JSON");
    }

    #[test]
    fn test_skip_carries_line_number() {
        let skip = classify_line(17, "not valid json").unwrap_err();
        assert_eq!(skip.line_number, 17);
        assert_eq!(skip.to_string(), "Line 17: invalid JSON");

        let skip = classify_line(3, r#"{"type":"checkpoint"}"#).unwrap_err();
        assert_eq!(skip.to_string(), "Line 3: unknown entry type \"checkpoint\"");
    }

    #[test]
    fn test_truncated_json_is_not_repaired() {
        let err = reason(r#"{"type":"iteration","iteration":1"#);
        assert_eq!(err.to_string(), "invalid JSON");
    }

    #[test]
    fn test_missing_type() {
        assert_eq!(reason(r#"{"foo":"bar"}"#).to_string(), "missing type field");

        // Non-objects have no discriminator either
        assert_eq!(reason("[1, 2, 3]").to_string(), "missing type field");
        assert_eq!(reason("42").to_string(), "missing type field");
    }

    #[test]
    fn test_unknown_type() {
        let err = reason(r#"{"type":"checkpoint"}"#);
        assert!(matches!(err, RecordError::Unrecognized(_)));
        assert_eq!(err.to_string(), "unknown entry type \"checkpoint\"");

        assert_eq!(reason(r#"{"type":7}"#).to_string(), "unknown entry type \"7\"");
    }

    #[test]
    fn test_classifies_each_kind() {
        let metadata = classify_line(1, r#"{"type":"metadata","config":{"root_model":"m"}}"#)
            .unwrap()
            .unwrap();
        assert_eq!(metadata.kind(), RecordKind::Metadata);

        let prompt = classify_line(2, r#"{"type":"initial_prompt","prompt":[]}"#)
            .unwrap()
            .unwrap();
        assert_eq!(prompt.kind(), RecordKind::InitialPrompt);

        let iteration = classify_line(3, r#"  {"type":"iteration"}  "#).unwrap().unwrap();
        assert_eq!(iteration.kind(), RecordKind::Iteration);
    }

    #[test]
    fn test_iteration_without_index_is_accepted() {
        let record = classify_line(1, r#"{"type":"iteration","response":"hi"}"#)
            .unwrap()
            .unwrap();

        match record {
            LogRecord::Iteration(it) => {
                assert!(it.iteration.is_none());
                assert_eq!(it.response.as_deref(), Some("hi"));
            }
            other => panic!("expected iteration, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_null_fields_do_not_reject_the_line() {
        let line = r#"{"type":"iteration","iteration":1,"code_blocks":[{"code":"x","result":{"rlm_calls":[{"model":null,"prompt":"p","response":null,"depth":null,"execution_time":null}]}}]}"#;
        let record = classify_line(1, line).unwrap().unwrap();
        assert_eq!(record.kind(), RecordKind::Iteration);

        let line = r#"{"type":"metadata","config":{"root_model":"m","max_depth":null,"backend":null}}"#;
        let record = classify_line(1, line).unwrap().unwrap();
        assert_eq!(record.kind(), RecordKind::Metadata);
    }

    #[test]
    fn test_wrongly_typed_field_is_malformed() {
        let err = reason(r#"{"type":"iteration","code_blocks":"nope"}"#);
        assert!(matches!(err, RecordError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed iteration record"));
    }
}
