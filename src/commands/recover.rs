//! Recover command: raw response in, project directory plus import map out

use std::io::Read;
use std::path::{Component, Path, PathBuf};

use console::style;

use crate::cli::RecoverArgs;
use crate::error::{RecoveryError, Result};
use crate::import_map::analyze_files_for_imports;
use crate::response::parse_response;

/// Recover a project from a raw LLM response
pub fn run(args: RecoverArgs) -> Result<()> {
    let raw = read_input(&args.input)?;
    let registry = super::load_registry(args.registry.as_deref())?;

    let response = parse_response(&raw)?;

    if response.truncated {
        eprintln!(
            "{} response was truncated; recovered content may be incomplete",
            style("warning:").yellow().bold()
        );
    }

    let mut written = 0usize;
    for (path, content) in &response.files {
        let Some(relative) = safe_relative_path(path) else {
            log::warn!("skipping unsafe path {path}");
            continue;
        };
        let target = args.out_dir.join(relative);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).map_err(|err| RecoveryError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: err.to_string(),
            })?;
        }
        std::fs::write(&target, content).map_err(|err| RecoveryError::FileWriteFailed {
            path: target.display().to_string(),
            reason: err.to_string(),
        })?;
        written += 1;
    }

    let import_map = analyze_files_for_imports(&response.files, &registry);
    let map_path = args
        .import_map
        .unwrap_or_else(|| args.out_dir.join("import-map.json"));
    write_import_map(&map_path, &import_map)?;

    println!(
        "{} recovered {} file{} into {}",
        style("✓").green().bold(),
        written,
        if written == 1 { "" } else { "s" },
        args.out_dir.display()
    );
    println!(
        "{} import map with {} entr{} at {}",
        style("✓").green().bold(),
        import_map.len(),
        if import_map.len() == 1 { "y" } else { "ies" },
        map_path.display()
    );
    if let Some(explanation) = &response.explanation {
        println!("\n{}", style(explanation).dim());
    }

    Ok(())
}

/// Read the response text from a file or, for `-`, from stdin.
fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| RecoveryError::FileReadFailed {
                path: "<stdin>".to_string(),
                reason: err.to_string(),
            })?;
        return Ok(buffer);
    }
    std::fs::read_to_string(input).map_err(|err| RecoveryError::FileReadFailed {
        path: input.to_string(),
        reason: err.to_string(),
    })
}

/// Reject recovered paths that would escape the output directory.
///
/// Model output is untrusted; a path with `..` or an absolute prefix must
/// never cause a write outside `--out-dir`. Leading slashes are stripped so
/// sandbox-absolute paths like `/App.tsx` still land inside the project.
fn safe_relative_path(path: &str) -> Option<PathBuf> {
    let trimmed = path.trim_start_matches(['/', '\\']);
    let relative = Path::new(trimmed);
    let escapes = relative.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || trimmed.is_empty() {
        None
    } else {
        Some(relative.to_path_buf())
    }
}

fn write_import_map(path: &Path, map: &crate::import_map::ImportMap) -> Result<()> {
    let json = serde_json::to_string_pretty(map)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| RecoveryError::FileWriteFailed {
            path: parent.display().to_string(),
            reason: err.to_string(),
        })?;
    }
    std::fs::write(path, json).map_err(|err| RecoveryError::FileWriteFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    })
}
