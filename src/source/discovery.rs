//! Discovery of trace logs on disk and the completeness check.

use crate::utils::error::SourceError;
use log::debug;
use serde_json::Value;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find trace files under a directory
///
/// **Public** - used by the scan command
///
/// # Arguments
/// * `dir` - Directory to search
/// * `extension` - File extension to match, without the dot
/// * `recursive` - Descend into subdirectories
///
/// # Returns
/// Matching file paths, sorted
pub fn discover_traces(
    dir: impl AsRef<Path>,
    extension: &str,
    recursive: bool,
) -> Result<Vec<PathBuf>, SourceError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(SourceError::NotADirectory(dir.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut found = Vec::new();

    for entry in WalkDir::new(dir).max_depth(max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .path()
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            found.push(entry.into_path());
        }
    }

    found.sort();
    debug!("Discovered {} trace files in {}", found.len(), dir.display());

    Ok(found)
}

/// Whether a run finished
///
/// **Public** - a trace is complete when its last non-empty line is JSON
/// with a non-null `final_answer`
pub fn is_trace_complete(text: &str) -> bool {
    let Some(last) = text.lines().map(str::trim).rev().find(|line| !line.is_empty()) else {
        return false;
    };

    match serde_json::from_str::<Value>(last) {
        Ok(entry) => entry.get("final_answer").is_some_and(|answer| !answer.is_null()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_is_trace_complete() {
        let done = "{\"type\":\"iteration\",\"final_answer\":null}\n{\"type\":\"iteration\",\"final_answer\":\"42\"}\n\n";
        assert!(is_trace_complete(done));

        let running = "{\"type\":\"iteration\",\"final_answer\":\"42\"}\n{\"type\":\"iteration\",\"final_answer\":null}";
        assert!(!is_trace_complete(running));

        assert!(!is_trace_complete(""));
        assert!(!is_trace_complete("{\"type\":\"iteration\",\"final_answer\":\"4"));
        assert!(!is_trace_complete("{\"type\":\"metadata\"}"));
    }

    #[test]
    fn test_discover_traces() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.jsonl"), "").unwrap();
        fs::write(dir.path().join("a.JSONL"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.jsonl"), "").unwrap();

        let flat = discover_traces(dir.path(), "jsonl", false).unwrap();
        let names: Vec<_> = flat
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.JSONL", "b.jsonl"]);

        let deep = discover_traces(dir.path(), "jsonl", true).unwrap();
        assert_eq!(deep.len(), 3);
    }

    #[test]
    fn test_discover_traces_not_a_directory() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let result = discover_traces(file.path(), "jsonl", false);
        assert!(matches!(result, Err(SourceError::NotADirectory(_))));
    }
}
