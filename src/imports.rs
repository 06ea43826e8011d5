//! Static import extraction
//!
//! Regex scan over generated source files collecting every bare module
//! specifier they reference. Three syntactic shapes are recognized: static
//! `import ... from "x"`, dynamic `import("x")`, and re-exporting
//! `export ... from "x"`. Relative and absolute specifiers are excluded;
//! the sandbox loader resolves those against the virtual file system itself.
//!
//! Extraction is a total function: any input yields a (possibly empty) set.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static STATIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s+[\w\s{},*$]*\s*from\s*["']([^"']+)["']"#).unwrap()
});

static DYNAMIC_IMPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"import\s*\(\s*["']([^"']+)["']\s*\)"#).unwrap()
});

static REEXPORT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"export\s+[\w\s{},*$]*\s*from\s*["']([^"']+)["']"#).unwrap()
});

/// Collect every bare module specifier referenced by `code`.
///
/// The returned set is deduplicated and iterates in a stable order, so import
/// maps built from it are reproducible.
pub fn extract_imports(code: &str) -> BTreeSet<String> {
    let mut specifiers = BTreeSet::new();
    for pattern in [&STATIC_IMPORT, &DYNAMIC_IMPORT, &REEXPORT] {
        for captures in pattern.captures_iter(code) {
            if let Some(specifier) = captures.get(1) {
                let specifier = specifier.as_str();
                if is_bare(specifier) {
                    specifiers.insert(specifier.to_string());
                }
            }
        }
    }
    specifiers
}

/// A specifier is bare when it is neither relative nor absolute.
fn is_bare(specifier: &str) -> bool {
    !specifier.starts_with('.') && !specifier.starts_with('/')
}
