//! Import map construction
//!
//! Aggregates the bare specifiers found across a whole file set into one
//! specifier-to-URL table the sandbox's module loader consumes at page load.
//! Each unique specifier resolves at most once; specifiers the resolver
//! declines (relative imports, Node built-ins) are omitted from the map.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::imports::extract_imports;
use crate::registry::Registry;
use crate::resolve::resolve_specifier;
use crate::response::FileSet;

/// Mapping from bare specifier to resolved CDN URL.
pub type ImportMap = BTreeMap<String, String>;

/// Runtime entries the sandbox needs before any generated code is analyzed.
///
/// React core and the JSX runtimes must be present for the bootstrap render;
/// the rest are the libraries generated projects import most often, kept warm
/// so a first render does not stall on resolution.
pub const ESSENTIAL_SPECIFIERS: [&str; 12] = [
    "react",
    "react-dom",
    "react-dom/client",
    "react/jsx-runtime",
    "react/jsx-dev-runtime",
    "lucide-react",
    "framer-motion",
    "motion",
    "motion/react",
    "clsx",
    "tailwind-merge",
    "zustand",
];

/// Build the import map for a recovered file set.
///
/// The key set is the deduplicated union of every bare specifier found in any
/// file; each resolves exactly once.
pub fn analyze_files_for_imports(files: &FileSet, registry: &Registry) -> ImportMap {
    let mut specifiers = BTreeSet::new();
    for content in files.values() {
        specifiers.extend(extract_imports(content));
    }

    let mut map = ImportMap::new();
    for specifier in specifiers {
        match resolve_specifier(&specifier, registry) {
            Some(url) => {
                map.insert(specifier, url);
            }
            None => log::debug!("no CDN mapping for {specifier}"),
        }
    }
    map
}

/// The fixed bootstrap map loaded into the sandbox before generation output.
pub fn base_import_map(registry: &Registry) -> ImportMap {
    let mut map = ImportMap::new();
    for specifier in ESSENTIAL_SPECIFIERS {
        if let Some(url) = resolve_specifier(specifier, registry) {
            map.insert(specifier.to_string(), url);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_across_files_resolved_once() {
        let mut files = FileSet::new();
        files.insert(
            "src/App.tsx".to_string(),
            "import { motion } from 'motion/react'\nimport React from 'react'".to_string(),
        );
        files.insert(
            "src/Chart.tsx".to_string(),
            "import React from 'react'\nimport { LineChart } from 'recharts'".to_string(),
        );

        let map = analyze_files_for_imports(&files, Registry::builtin());
        let keys: Vec<&str> = map.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["motion/react", "react", "recharts"]);
        assert_eq!(
            map.get("motion/react").map(String::as_str),
            Some("https://esm.sh/motion@12.0.0/react?external=react,react-dom")
        );
    }

    #[test]
    fn test_relative_and_builtin_specifiers_omitted() {
        let mut files = FileSet::new();
        files.insert(
            "src/main.ts".to_string(),
            "import { helper } from './helper'\nimport fs from 'fs'\nimport axios from 'axios'"
                .to_string(),
        );

        let map = analyze_files_for_imports(&files, Registry::builtin());
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("axios"));
    }

    #[test]
    fn test_empty_file_set_gives_empty_map() {
        let map = analyze_files_for_imports(&FileSet::new(), Registry::builtin());
        assert!(map.is_empty());
    }

    #[test]
    fn test_base_map_covers_every_essential() {
        let map = base_import_map(Registry::builtin());
        assert_eq!(map.len(), ESSENTIAL_SPECIFIERS.len());
        assert_eq!(
            map.get("react-dom/client").map(String::as_str),
            Some("https://esm.sh/react-dom@18.3.1/client?external=react")
        );
    }
}
