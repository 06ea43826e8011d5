//! Unfurl - recover runnable projects from LLM responses
//!
//! LLM code-generation calls return a single text blob that is supposed to
//! contain a JSON map of file paths to file contents. In practice the blob is
//! wrapped in markdown fences, prefixed with prose, or cut off mid-token by a
//! generation limit. Unfurl turns that blob into a validated multi-file
//! project and resolves every bare module specifier the project references to
//! an esm.sh URL, so the result can run in a dependency-free browser sandbox
//! with no package manager, lockfile, or `node_modules` tree.
//!
//! The pipeline, leaves first:
//!
//! - [`sanitize`] strips markdown fence artifacts from raw model output
//! - [`response`] extracts the JSON file map, repairing truncated documents
//! - [`imports`] collects bare module specifiers from recovered source files
//! - [`registry`] holds the curated specifier-to-package lookup table
//! - [`resolve`] maps one specifier to a CDN URL
//! - [`import_map`] aggregates resolved specifiers for a whole file set
//! - [`diagnose`] classifies browser module-resolution error messages
//!
//! Every operation is a pure, synchronous string transformation; the registry
//! is read-only after construction and may be shared freely across threads.

pub mod cli;
pub mod commands;
pub mod diagnose;
pub mod error;
pub mod import_map;
pub mod imports;
pub mod registry;
pub mod resolve;
pub mod response;
pub mod sanitize;

pub use diagnose::parse_specifier_error;
pub use error::{RecoveryError, Result};
pub use import_map::{ImportMap, analyze_files_for_imports, base_import_map};
pub use imports::extract_imports;
pub use registry::{PackageConfig, Registry};
pub use resolve::{build_esm_url, resolve_specifier};
pub use response::{FileSet, ParsedResponse, parse_response};
pub use sanitize::sanitize;
