//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "skillforge",
    bin_name = "skillforge",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} From business problem to AI-native project skeleton",
    long_about = "Skillforge analyzes a business problem, recommends tool \
                  integrations, and generates a project skeleton with an \
                  AI agent team configuration.",
    after_help = "EXAMPLES:\n\
        \x20 skillforge discovery -i notes.md -o discovery.json\n\
        \x20 skillforge tools -i discovery.json\n\
        \x20 skillforge scaffold -d discovery.json -o ./projects\n\
        \x20 skillforge completions bash > /usr/share/bash-completion/completions/skillforge",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyze a business problem into a strategic discovery result.
    #[command(
        visible_alias = "d",
        about = "Run the discovery analysis",
        after_help = "EXAMPLES:\n\
            \x20 skillforge discovery -i notes.md\n\
            \x20 skillforge discovery -i input.json -o discovery.json\n\
            \x20 cat input.json | skillforge discovery --json\n\
            \x20 skillforge discovery --schema"
    )]
    Discovery(DiscoveryArgs),

    /// Recommend tool integrations for a discovery result.
    #[command(
        visible_alias = "t",
        about = "Select tools for a discovery result",
        after_help = "EXAMPLES:\n\
            \x20 skillforge tools -i discovery.json\n\
            \x20 skillforge tools -i discovery.json --json -o tools.json\n\
            \x20 skillforge tools --catalog"
    )]
    Tools(ToolsArgs),

    /// Generate the project skeleton.
    #[command(
        visible_alias = "s",
        about = "Scaffold a project from a discovery result",
        after_help = "EXAMPLES:\n\
            \x20 skillforge scaffold -d discovery.json\n\
            \x20 skillforge scaffold -d discovery.json -t tools.json -o ./projects"
    )]
    Scaffold(ScaffoldArgs),

    /// One-time setup: persist the API key.
    #[command(
        about = "Store the Anthropic API key",
        after_help = "EXAMPLES:\n\
            \x20 skillforge init --api-key sk-ant-...\n\
            \x20 ANTHROPIC_API_KEY=sk-ant-... skillforge init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 skillforge completions bash > ~/.local/share/bash-completion/completions/skillforge\n\
            \x20 skillforge completions zsh  > ~/.zfunc/_skillforge\n\
            \x20 skillforge completions fish > ~/.config/fish/completions/skillforge.fish"
    )]
    Completions(CompletionsArgs),
}

// ── discovery ─────────────────────────────────────────────────────────────────

/// Arguments for `skillforge discovery`.
#[derive(Debug, Args)]
pub struct DiscoveryArgs {
    /// Input file: structured JSON or free-form text/markdown.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Input file (JSON or free-form text)"
    )]
    pub input: Option<PathBuf>,

    /// Write the discovery result to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    /// Emit the result as JSON.
    #[arg(long = "json", help = "JSON output (reads stdin when no --input)")]
    pub json: bool,

    /// Print the input JSON schema and exit.
    #[arg(long = "schema", help = "Print the input JSON schema and exit")]
    pub schema: bool,
}

// ── tools ─────────────────────────────────────────────────────────────────────

/// Arguments for `skillforge tools`.
#[derive(Debug, Args)]
pub struct ToolsArgs {
    /// Discovery result file to select tools for.
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Discovery result file"
    )]
    pub input: Option<PathBuf>,

    /// Write the selection to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    /// Emit the selection as JSON.
    #[arg(long = "json", help = "JSON output")]
    pub json: bool,

    /// Print the full tool catalog and exit.
    #[arg(long = "catalog", help = "Print the full tool catalog and exit")]
    pub catalog: bool,
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `skillforge scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Discovery result file.
    #[arg(
        short = 'd',
        long = "discovery",
        value_name = "FILE",
        help = "Discovery result file"
    )]
    pub discovery: PathBuf,

    /// Tool selection file.  When absent, selection is computed from the
    /// discovery result.
    #[arg(
        short = 't',
        long = "tools",
        value_name = "FILE",
        help = "Tool selection file (computed when absent)"
    )]
    pub tools: Option<PathBuf>,

    /// Directory the project folder is created under.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output: PathBuf,

    /// Emit the scaffold result as JSON.
    #[arg(long = "json", help = "JSON output")]
    pub json: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `skillforge init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// API key to store.  Falls back to `ANTHROPIC_API_KEY`.
    #[arg(long = "api-key", value_name = "KEY", help = "Anthropic API key")]
    pub api_key: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `skillforge completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
