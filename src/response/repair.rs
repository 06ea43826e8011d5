//! String-aware repair of truncated JSON documents
//!
//! A model that hits its token limit stops mid-token: inside a string value,
//! right after a key, between entries. Naive brace counting cannot tell a
//! structural `{` from one inside a string literal, so the scanner tracks
//! string and escape state while balancing depth. Repair is best-effort by
//! design: it restores structural well-formedness, not the content the model
//! never produced.

use once_cell::sync::Lazy;
use regex::Regex;

/// Transient scanner state, discarded after each pass.
#[derive(Debug, Default, Clone, Copy)]
struct RepairState {
    brace_depth: i32,
    bracket_depth: i32,
    in_string: bool,
    escape_next: bool,
}

/// Trailing comma plus whitespace.
static TRAILING_COMMA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r",\s*$").unwrap()
});

/// A complete key with no value, e.g. `"key":` at the end of input.
static DANGLING_KEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#",?\s*"(?:[^"\\]|\\.)*"\s*:\s*$"#).unwrap()
});

/// A key whose string value never terminates.
///
/// After the dangling-quote append this only happens when the input ended in
/// a backslash, leaving the appended quote escaped.
static DANGLING_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#",?\s*"(?:[^"\\]|\\.)*"\s*:\s*"(?:[^"\\]|\\.)*$"#).unwrap()
});

/// Reconstruct a syntactically valid document from a truncated one.
///
/// Already-balanced input comes back unchanged. Otherwise: terminate a
/// dangling string, strip the trailing incomplete fragment, and append the
/// closing brackets and braces the truncation swallowed. Brackets close
/// before braces; arrays nest inside objects in the file-map schema, so
/// last-opened-first-closed holds.
pub fn repair_truncated_json(text: &str) -> String {
    let mut repaired = text.to_string();

    let state = scan(&repaired);
    if state.in_string {
        repaired.push('"');
    }

    repaired = strip_trailing_fragment(&repaired);

    let state = scan(&repaired);
    for _ in 0..state.bracket_depth.max(0) {
        repaired.push(']');
    }
    for _ in 0..state.brace_depth.max(0) {
        repaired.push('}');
    }

    repaired
}

/// Scan the text, balancing depth while honoring string and escape state.
///
/// A backslash inside a string consumes exactly the following character; an
/// unescaped double quote toggles string state; braces and brackets only
/// count outside strings.
fn scan(text: &str) -> RepairState {
    let mut state = RepairState::default();
    for ch in text.chars() {
        if state.escape_next {
            state.escape_next = false;
            continue;
        }
        match ch {
            '\\' if state.in_string => state.escape_next = true,
            '"' => state.in_string = !state.in_string,
            '{' if !state.in_string => state.brace_depth += 1,
            '}' if !state.in_string => state.brace_depth -= 1,
            '[' if !state.in_string => state.bracket_depth += 1,
            ']' if !state.in_string => state.bracket_depth -= 1,
            _ => {}
        }
    }
    state
}

/// Strip the trailing incomplete fragment, applying only the first matching
/// pattern: a trailing comma, a complete key with no value, a key with an
/// unterminated string value.
fn strip_trailing_fragment(text: &str) -> String {
    for pattern in [&TRAILING_COMMA, &DANGLING_KEY, &DANGLING_VALUE] {
        if pattern.is_match(text) {
            return pattern.replace(text, "").into_owned();
        }
    }
    text.to_string()
}
