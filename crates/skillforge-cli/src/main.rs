//! # Skillforge CLI
//!
//! Business problem → strategic analysis → tool selection → project skeleton.
//!
//! ## Startup sequence
//!
//! 1. Load `.env` and the persisted `~/.skillforge/.env`.
//! 2. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 3. Initialise the tracing subscriber (logging).
//! 4. Load configuration (file + env + defaults).
//! 5. Build the [`OutputManager`].
//! 6. Dispatch to the appropriate command handler.
//! 7. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before anything else — including tracing init.  Silently
    // ignored when absent.  Already-set variables win, so a real environment
    // always beats the persisted key from `skillforge init`.
    let _ = dotenvy::dotenv();
    config::load_persisted_env(AppConfig::credentials_file().as_deref());

    // ── 1. Parse arguments ────────────────────────────────────────────────
    // clap handles --help / --version and exits automatically; errors here
    // are argument-parse failures (exit 2).
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version land here too; they print to stdout and
            // exit 0, real parse failures go to stderr and exit 2.
            let code = if e.use_stderr() { 2 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_ref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Configuration error: {e:#}");
            return ExitCode::from(4);
        }
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // JSON error rendering is decided per invocation, before dispatch.
    let json_errors = json_mode(&cli.command);
    let verbose = cli.global.verbose > 0;

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output).await {
        Ok(()) => {
            info!("Skillforge completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, json_errors, verbose),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
async fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Discovery(cmd) => commands::discovery::execute(cmd, config, output).await,
        Commands::Tools(cmd) => commands::tools::execute(cmd, output),
        Commands::Scaffold(cmd) => commands::scaffold::execute(cmd, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
    }
}

/// Whether the invoked command asked for JSON output.
fn json_mode(command: &Commands) -> bool {
    match command {
        Commands::Discovery(cmd) => cmd.json,
        Commands::Tools(cmd) => cmd.json,
        Commands::Scaffold(cmd) => cmd.json,
        Commands::Init(_) | Commands::Completions(_) => false,
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
///
/// This is the single place where structured errors become human-readable
/// output (or a JSON payload) and OS exit codes.
fn handle_error(err: CliError, json: bool, verbose: bool) -> ExitCode {
    err.log();

    if json {
        // Machine consumers read stderr for the structured payload.
        eprintln!("{}", err.json_payload());
    } else {
        // Colour is disabled when stderr is not a TTY (same logic as
        // logging.rs).
        let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
            err.format_colored(verbose)
        } else {
            err.format_plain(verbose)
        };
        eprint!("{msg}");
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        // Clap's internal consistency check — catches missing values, conflicts, etc.
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn json_mode_follows_command_flag() {
        let cli = Cli::parse_from(["skillforge", "tools", "--catalog", "--json"]);
        assert!(json_mode(&cli.command));
        let cli = Cli::parse_from(["skillforge", "tools", "--catalog"]);
        assert!(!json_mode(&cli.command));
    }
}
