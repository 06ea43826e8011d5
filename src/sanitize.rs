//! Markdown fence sanitization for raw LLM output
//!
//! Models wrap generated code in markdown fences far more often than not, and
//! the wrapping is inconsistent: an opening fence with or without a language
//! tag, a bare language identifier on its own first line, fences embedded in
//! the middle of a file's content. Sanitization is an ordered list of pure
//! string passes, each removing one artifact class, so a fence-tag variant can
//! be added without touching the parser or resolver.
//!
//! Applying [`sanitize`] twice yields the same result as applying it once.

use once_cell::sync::Lazy;
use regex::Regex;

/// Language tags a model may attach to an opening fence.
///
/// Longer tags come before their prefixes (`tsx` before `ts`) so the
/// alternation never leaves a stray trailing character behind.
const FENCE_LANGUAGES: &str = "javascript|typescript|tsx|jsx|ts|js|react|html|css|json|sql|markdown|md|plaintext|text|sh|bash|shell";

static OPENING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?im)^```(?:{FENCE_LANGUAGES})?[ \t]*(?:\r?\n|$)"
    ))
    .unwrap()
});

static CLOSING_FENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^```[ \t]*$").unwrap()
});

static LANGUAGE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(?:{FENCE_LANGUAGES})$")).unwrap()
});

/// Strip markdown code-fence artifacts from raw model output.
///
/// Passes run in order: opening fence lines (optionally tagged), trailing
/// fence lines, a leading bare language-identifier line, stray triple-backtick
/// sequences anywhere in the text, and finally whitespace trimming.
pub fn sanitize(raw: &str) -> String {
    let text = strip_opening_fences(raw);
    let text = strip_closing_fences(&text);
    let text = strip_leading_language_line(&text);
    let text = strip_stray_backticks(&text);
    text.trim().to_string()
}

/// Remove fence lines that open a code block, with or without a language tag.
fn strip_opening_fences(text: &str) -> String {
    OPENING_FENCE.replace_all(text, "").into_owned()
}

/// Remove bare fence lines left over after opening-fence removal.
fn strip_closing_fences(text: &str) -> String {
    CLOSING_FENCE.replace_all(text, "").into_owned()
}

/// Remove leading lines that contain only a language identifier.
///
/// Some models emit the tag on its own line after the fence, so it survives
/// fence stripping. Loops so stacked identifier lines cannot defeat the
/// idempotence guarantee.
fn strip_leading_language_line(text: &str) -> String {
    let mut remaining = text.trim_start();
    loop {
        match remaining.split_once('\n') {
            Some((first, rest)) if LANGUAGE_LINE.is_match(first.trim_end()) => {
                remaining = rest.trim_start();
            }
            None if LANGUAGE_LINE.is_match(remaining.trim_end()) => return String::new(),
            _ => break,
        }
    }
    remaining.to_string()
}

/// Remove any triple-backtick sequences that survived the line-based passes.
fn strip_stray_backticks(text: &str) -> String {
    text.replace("```", "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_opening_fence_with_language_tag() {
        let raw = "```typescript\nconst x = 1;\n```";
        assert_eq!(sanitize(raw), "const x = 1;");
    }

    #[test]
    fn test_strips_opening_fence_case_insensitively() {
        let raw = "```TypeScript\nconst x = 1;\n```";
        assert_eq!(sanitize(raw), "const x = 1;");
    }

    #[test]
    fn test_strips_bare_fences() {
        let raw = "```\n{\"a\": 1}\n```\n";
        assert_eq!(sanitize(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_tsx_tag_does_not_leave_stray_suffix() {
        // `ts` must not match inside `tsx` and leave an `x` behind
        let raw = "```tsx\nexport default function App() {}\n```";
        assert_eq!(sanitize(raw), "export default function App() {}");
    }

    #[test]
    fn test_strips_leading_language_identifier_line() {
        let raw = "typescript\nconst x = 1;";
        assert_eq!(sanitize(raw), "const x = 1;");
    }

    #[test]
    fn test_strips_stacked_language_identifier_lines() {
        let raw = "typescript\njavascript\nconst x = 1;";
        assert_eq!(sanitize(raw), "const x = 1;");
    }

    #[test]
    fn test_strips_stray_backticks_mid_text() {
        let raw = "const a = 1;```\nconst b = 2;";
        assert_eq!(sanitize(raw), "const a = 1;\nconst b = 2;");
    }

    #[test]
    fn test_fence_tag_with_other_text_is_kept() {
        // A line starting with ``` followed by arbitrary prose is not a fence
        let raw = "```tsx extra prose\nbody";
        assert_eq!(sanitize(raw), "tsx extra prose\nbody");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let raw = "const x = 1;\nconst y = 2;";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(sanitize("  \n{\"a\": 1}\n  "), "{\"a\": 1}");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "```typescript\nconst x = 1;\n```",
            "typescript\nconst x = 1;",
            "prefix ```json\n{\"a\": 1}\n``` suffix",
            "no fences at all",
            "",
            "```\n```\n```",
        ];
        for raw in samples {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }
}
