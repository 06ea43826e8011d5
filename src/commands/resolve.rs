//! Resolve command: one specifier in, one URL out

use console::style;

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::resolve::{NODE_BUILTINS, resolve_specifier};

/// Resolve a single module specifier to a CDN URL
pub fn run(args: ResolveArgs) -> Result<()> {
    let registry = super::load_registry(args.registry.as_deref())?;

    match resolve_specifier(&args.specifier, &registry) {
        Some(url) => {
            println!("{url}");
            Ok(())
        }
        None => {
            let reason = if args.specifier.starts_with('.') || args.specifier.starts_with('/') {
                "relative imports resolve against the project, not the CDN"
            } else if is_node_builtin(&args.specifier) {
                "Node built-ins have no browser equivalent"
            } else {
                "no CDN mapping"
            };
            eprintln!(
                "{} {}: {reason}",
                style("no mapping for").red().bold(),
                args.specifier
            );
            std::process::exit(1);
        }
    }
}

fn is_node_builtin(specifier: &str) -> bool {
    let first_segment = specifier.split('/').next().unwrap_or(specifier);
    NODE_BUILTINS.contains(&first_segment)
}
