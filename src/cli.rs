//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unfurl - LLM project recovery
///
/// Turn raw model output into a validated multi-file project with a resolved
/// import map, ready for a dependency-free execution sandbox.
#[derive(Parser, Debug)]
#[command(
    name = "unfurl",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Recover runnable projects from LLM responses",
    long_about = "Unfurl recovers a multi-file project from raw LLM output (markdown-wrapped, \
                  malformed, or truncated mid-token), then statically resolves every bare module \
                  specifier the project references to an esm.sh URL - no package manager, \
                  lockfile, or node_modules tree involved.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  unfurl recover response.txt --out-dir ./project\n    \
                  cat response.txt | unfurl recover - --out-dir ./project\n    \
                  unfurl imports ./project\n    \
                  unfurl resolve lucide-react\n\n\
                  \x1b[1m\x1b[32mDocumentation:\x1b[0m\n    \
                  https://github.com/unfurl-dev/unfurl"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Recover a project from a raw LLM response
    Recover(RecoverArgs),

    /// Build the import map for an existing project directory
    Imports(ImportsArgs),

    /// Resolve a single module specifier to a CDN URL
    Resolve(ResolveArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the recover command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Recover from a saved response:\n    unfurl recover response.txt --out-dir ./project\n\n\
                  Recover from stdin:\n    cat response.txt | unfurl recover - --out-dir ./project\n\n\
                  Write the import map elsewhere:\n    unfurl recover response.txt -o ./project --import-map ./map.json\n\n\
                  Use custom package pins:\n    unfurl recover response.txt -o ./project --registry pins.yaml")]
pub struct RecoverArgs {
    /// Response file to read, or `-` for stdin
    pub input: String,

    /// Directory to write recovered files into
    #[arg(long, short = 'o')]
    pub out_dir: PathBuf,

    /// Where to write the import map (defaults to <out-dir>/import-map.json)
    #[arg(long)]
    pub import_map: Option<PathBuf>,

    /// YAML registry file layered over the built-in package table
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Arguments for the imports command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the import map for a project:\n    unfurl imports ./project\n\n\
                  Include the sandbox bootstrap entries:\n    unfurl imports ./project --base\n\n\
                  Use custom package pins:\n    unfurl imports ./project --registry pins.yaml")]
pub struct ImportsArgs {
    /// Project directory to scan
    pub dir: PathBuf,

    /// Merge in the essential sandbox bootstrap entries
    #[arg(long)]
    pub base: bool,

    /// YAML registry file layered over the built-in package table
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve a registered package:\n    unfurl resolve lucide-react\n\n\
                  Resolve a scoped subpath:\n    unfurl resolve @radix-ui/react-dialog/foo\n\n\
                  Use custom package pins:\n    unfurl resolve lucide-react --registry pins.yaml")]
pub struct ResolveArgs {
    /// Module specifier to resolve
    pub specifier: String,

    /// YAML registry file layered over the built-in package table
    #[arg(long)]
    pub registry: Option<PathBuf>,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    unfurl completions --shell bash > ~/.bash_completion.d/unfurl\n\n\
                  Generate zsh completions:\n    unfurl completions --shell zsh > ~/.zfunc/_unfurl\n\n\
                  Generate fish completions:\n    unfurl completions --shell fish > ~/.config/fish/completions/unfurl.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
