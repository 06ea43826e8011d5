//! Library-level pipeline tests: raw response text through to import map

use unfurl::registry::{PackageConfig, Registry};
use unfurl::{analyze_files_for_imports, parse_response, resolve_specifier, sanitize};

#[test]
fn test_truncated_response_end_to_end() {
    // Cut mid-statement by a token limit: no closing quote, bracket, or brace
    // anywhere in sight.
    let raw = "{\"files\":{\"src/App.tsx\":\"import { motion } from 'motion/react'\\nexport default function App";

    let parsed = parse_response(raw).expect("repair should recover the file map");
    assert!(parsed.truncated);

    let content = parsed
        .files
        .get("src/App.tsx")
        .expect("App.tsx should survive recovery");
    assert!(content.contains("motion/react"));

    let map = analyze_files_for_imports(&parsed.files, Registry::builtin());
    assert_eq!(
        map.get("motion/react").map(String::as_str),
        Some("https://esm.sh/motion@12.0.0/react?external=react,react-dom")
    );
}

#[test]
fn test_fenced_and_prose_wrapped_response_end_to_end() {
    let raw = "Sure! Here's a two file project.\n\n```json\n{\"files\":{\"src/App.tsx\":\"import { Star } from 'lucide-react'\\nexport default function App() { return <Star /> }\",\"src/store.ts\":\"import { create } from 'zustand'\"},\"explanation\":\"Icon plus a store\"}\n```\n\nLet me know what you think!";

    let sanitized = sanitize(raw);
    let parsed = parse_response(&sanitized).expect("clean response should parse");
    assert!(!parsed.truncated);
    assert_eq!(parsed.files.len(), 2);
    assert_eq!(parsed.explanation.as_deref(), Some("Icon plus a store"));

    let map = analyze_files_for_imports(&parsed.files, Registry::builtin());
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["lucide-react", "zustand"]);
    assert_eq!(
        map.get("lucide-react").map(String::as_str),
        Some("https://esm.sh/lucide-react@0.469.0?external=react")
    );
}

#[test]
fn test_import_map_keys_are_the_union_of_all_files() {
    let raw = "{\"files\":{\"a.tsx\":\"import React from 'react'\\nimport { X } from 'lucide-react'\",\"b.tsx\":\"import React from 'react'\\nimport axios from 'axios'\\nimport local from './local'\"}}";

    let parsed = parse_response(raw).expect("valid response");
    let map = analyze_files_for_imports(&parsed.files, Registry::builtin());

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["axios", "lucide-react", "react"]);
}

#[test]
fn test_injected_registry_controls_resolution() {
    let registry = Registry::new(vec![(
        "tiny-lib".to_string(),
        PackageConfig {
            package: "tiny-lib".to_string(),
            version: Some("0.1.0".to_string()),
            subpath: None,
            external: vec![],
        },
    )]);

    assert_eq!(
        resolve_specifier("tiny-lib", &registry).as_deref(),
        Some("https://esm.sh/tiny-lib@0.1.0")
    );
    // The injected table knows nothing about react; resolution still answers
    // with the permissive fallback rather than failing closed.
    assert_eq!(
        resolve_specifier("react", &registry).as_deref(),
        Some("https://esm.sh/react?external=react,react-dom")
    );
}

#[test]
fn test_sanitize_then_parse_is_stable() {
    let raw = "```typescript\n{\"a.ts\":\"const x = 1;\"}\n```";
    let once = sanitize(raw);
    let twice = sanitize(&once);
    assert_eq!(once, twice);

    let parsed = parse_response(&twice).expect("sanitized response should parse");
    assert_eq!(
        parsed.files.get("a.ts").map(String::as_str),
        Some("const x = 1;")
    );
}
