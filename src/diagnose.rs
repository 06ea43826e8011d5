//! Browser module-error classification
//!
//! When the sandbox hits a specifier the import map missed, the browser
//! throws with one of two known phrasings. Extracting the specifier from the
//! message lets the caller resolve it, inject it into the import map, and
//! retry; that retry loop lives with the caller, not here.

use once_cell::sync::Lazy;
use regex::Regex;

static BARE_SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"specifier ['"]([^'"]+)['"] was a bare specifier"#).unwrap()
});

static FAILED_RESOLVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"Failed to resolve module specifier ['"]([^'"]+)['"]"#).unwrap()
});

/// Extract the offending specifier from a browser resolution error message.
pub fn parse_specifier_error(message: &str) -> Option<String> {
    for pattern in [&BARE_SPECIFIER, &FAILED_RESOLVE] {
        if let Some(captures) = pattern.captures(message) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_specifier_phrasing() {
        let message = "Uncaught TypeError: The specifier \"zustand\" was a bare specifier, but was not remapped to anything.";
        assert_eq!(parse_specifier_error(message).as_deref(), Some("zustand"));
    }

    #[test]
    fn test_failed_resolve_phrasing() {
        let message = "Uncaught TypeError: Failed to resolve module specifier \"lucide-react\". Relative references must start with either \"/\", \"./\", or \"../\".";
        assert_eq!(
            parse_specifier_error(message).as_deref(),
            Some("lucide-react")
        );
    }

    #[test]
    fn test_single_quoted_specifier() {
        let message = "Failed to resolve module specifier 'motion/react'.";
        assert_eq!(
            parse_specifier_error(message).as_deref(),
            Some("motion/react")
        );
    }

    #[test]
    fn test_unrelated_message_is_none() {
        assert_eq!(parse_specifier_error("SyntaxError: unexpected token"), None);
        assert_eq!(parse_specifier_error(""), None);
    }
}
