//! Response parsing and validation
//!
//! Extracts a multi-file JSON payload from sanitized LLM output. The expected
//! envelope is `{"files": {path: content, ...}, "explanation": "..."}`, but
//! models also emit the file map at the top level, wrap everything in a
//! fenced block, or run into their token limit mid-string. Direct parsing is
//! attempted first; on failure the [`repair`] engine reconstructs a
//! syntactically valid document before giving up.

pub mod repair;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{RecoveryError, Result};
use crate::sanitize::sanitize;

/// Ordered mapping from file path to file content.
pub type FileSet = BTreeMap<String, String>;

/// A validated response recovered from raw model output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    /// Recovered file map. Never empty; every key is path-like.
    pub files: FileSet,
    /// Free-form explanation the model attached to the payload, if any.
    pub explanation: Option<String>,
    /// Whether the repair path had to run to produce this response.
    pub truncated: bool,
}

/// Path segments that never belong in a generated project.
pub const IGNORED_PATHS: [&str; 9] = [
    ".git",
    "node_modules",
    ".next",
    ".nuxt",
    "dist",
    "build",
    ".cache",
    ".DS_Store",
    "Thumbs.db",
];

/// Top-level keys that describe the response rather than name a file.
const RESERVED_KEYS: [&str; 3] = ["files", "explanation", "description"];

static CODE_BLOCK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)```(?:\w+)?[ \t]*\n(.*?)```").unwrap()
});

/// Parse raw or sanitized model output into a [`ParsedResponse`].
///
/// Fails with [`RecoveryError::NoJsonFound`] when the text holds no JSON
/// object at all, [`RecoveryError::TruncatedUnrecoverable`] when repair cannot
/// reconstruct one, and [`RecoveryError::EmptyFileSet`] when a parse succeeds
/// but no path-like keys survive filtering.
pub fn parse_response(text: &str) -> Result<ParsedResponse> {
    let candidate = extract_candidate(text).ok_or(RecoveryError::NoJsonFound)?;

    match serde_json::from_str::<Value>(candidate) {
        Ok(Value::Object(object)) => build_parsed(object, false),
        _ => {
            log::debug!("direct parse failed, entering repair path");
            let object = recover_object(candidate)?;
            build_parsed(object, true)
        }
    }
}

/// Locate the JSON candidate inside the response text.
///
/// Prefers the content of a fenced code block over the full text, then takes
/// the greedy span from the first `{` to the last `}`. A truncated response
/// may have no closing brace at all, in which case the span runs to the end
/// of the text.
fn extract_candidate(text: &str) -> Option<&str> {
    let body = CODE_BLOCK
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map_or(text, |block| block.as_str());

    let start = body.find('{')?;
    let end = body
        .rfind('}')
        .filter(|&index| index > start)
        .map_or(body.len(), |index| index + 1);
    Some(&body[start..end])
}

/// Run the repair engine, falling back to a files-only salvage.
fn recover_object(candidate: &str) -> Result<serde_json::Map<String, Value>> {
    let repaired = repair::repair_truncated_json(candidate);
    if let Ok(Value::Object(object)) = serde_json::from_str(&repaired) {
        return Ok(object);
    }

    log::debug!("full-document repair failed, attempting files-only salvage");
    salvage_files_object(candidate).ok_or(RecoveryError::TruncatedUnrecoverable)
}

/// Salvage a partial `files` object when the rest of the envelope is gone.
///
/// Re-wraps the `{` that follows a `"files"` key in a synthetic outer brace
/// and sends it through the same repair routine, so file entries survive even
/// when a trailing `explanation` value was destroyed by truncation.
fn salvage_files_object(candidate: &str) -> Option<serde_json::Map<String, Value>> {
    let key = candidate.find("\"files\"")?;
    let brace = candidate[key..].find('{')? + key;
    let wrapped = format!("{{\"files\":{}", &candidate[brace..]);

    let repaired = repair::repair_truncated_json(&wrapped);
    match serde_json::from_str(&repaired) {
        Ok(Value::Object(object)) => Some(object),
        _ => None,
    }
}

/// Validate a parsed object and filter it down to a usable file map.
fn build_parsed(
    object: serde_json::Map<String, Value>,
    truncated: bool,
) -> Result<ParsedResponse> {
    let explanation = object
        .get("explanation")
        .and_then(Value::as_str)
        .map(str::to_string);

    // The file collection is the `files` value when present, otherwise the
    // object's own top-level keys minus the reserved envelope keys.
    let candidates: Vec<(&String, &Value)> = match object.get("files") {
        Some(Value::Object(files)) => files.iter().collect(),
        _ => object
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .collect(),
    };

    let path_like: Vec<(&String, &str)> = candidates
        .into_iter()
        .filter_map(|(key, value)| value.as_str().map(|content| (key, content)))
        .filter(|(key, _)| looks_like_path(key))
        .collect();

    if path_like.is_empty() {
        return Err(RecoveryError::EmptyFileSet);
    }

    let mut files = FileSet::new();
    for (path, content) in path_like {
        if is_ignored_path(path) {
            log::debug!("dropping ignored path {path}");
            continue;
        }
        files.insert(path.clone(), sanitize(content));
    }

    if files.is_empty() {
        return Err(RecoveryError::EmptyFileSet);
    }

    Ok(ParsedResponse {
        files,
        explanation,
        truncated,
    })
}

/// A key names a file when it contains a `.` or a `/`.
fn looks_like_path(key: &str) -> bool {
    key.contains('.') || key.contains('/')
}

/// Whether any segment of the path is on the ignored list.
///
/// Matches exact `/`-separated segments after normalizing backslashes, never
/// substring containment, so `my_dist/file.ts` survives while
/// `dist/file.ts` and `packages/app/node_modules/x.js` do not.
fn is_ignored_path(path: &str) -> bool {
    let normalized = path.replace('\\', "/");
    normalized
        .split('/')
        .filter(|segment| !segment.is_empty())
        .any(|segment| IGNORED_PATHS.contains(&segment))
}
