//! Unfurl - LLM project recovery
//!
//! Command line entry point. Recovers a multi-file project from raw LLM
//! output and resolves its imports to CDN URLs for sandbox execution.

use clap::Parser;

use unfurl::cli::{Cli, Commands};
use unfurl::commands;

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Recover(args) => commands::recover::run(args),
        Commands::Imports(args) => commands::imports::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
