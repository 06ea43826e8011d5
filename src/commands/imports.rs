//! Imports command: scan a project directory, print its import map

use std::collections::BTreeSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::cli::ImportsArgs;
use crate::error::{RecoveryError, Result};
use crate::import_map::{ImportMap, base_import_map};
use crate::imports::extract_imports;
use crate::resolve::resolve_specifier;
use crate::response::IGNORED_PATHS;

/// File extensions the scanner treats as module source.
const SOURCE_EXTENSIONS: [&str; 6] = ["js", "jsx", "ts", "tsx", "mjs", "cjs"];

/// Build the import map for an existing project directory
pub fn run(args: ImportsArgs) -> Result<()> {
    let registry = super::load_registry(args.registry.as_deref())?;

    let mut specifiers = BTreeSet::new();
    let walker = WalkDir::new(&args.dir)
        .into_iter()
        .filter_entry(|entry| !is_ignored_dir(entry.path()));

    for entry in walker {
        let entry = entry.map_err(|err| RecoveryError::IoError {
            message: err.to_string(),
        })?;
        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }
        let content = std::fs::read_to_string(entry.path()).map_err(|err| {
            RecoveryError::FileReadFailed {
                path: entry.path().display().to_string(),
                reason: err.to_string(),
            }
        })?;
        specifiers.extend(extract_imports(&content));
    }

    let mut map = if args.base {
        base_import_map(&registry)
    } else {
        ImportMap::new()
    };
    for specifier in specifiers {
        if let Some(url) = resolve_specifier(&specifier, &registry) {
            map.insert(specifier, url);
        }
    }

    println!("{}", serde_json::to_string_pretty(&map)?);
    Ok(())
}

fn is_ignored_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| IGNORED_PATHS.contains(&name))
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| SOURCE_EXTENSIONS.contains(&extension))
}
