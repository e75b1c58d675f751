//! Error handling for the Skillforge CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use skillforge_core::error::SkillforgeError;

// Re-export so callers only need `use crate::error::*`.
pub use skillforge_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input before the core is ever reached.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// An input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from the core pipeline.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the core
    /// error's category without touching core internals.
    #[error("{0}")]
    Core(#[from] SkillforgeError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => {
                let mut hints = vec![format!("Check your input: {message}")];
                hints.extend(keyed_hints(message));
                hints.push("Use --help for usage information".into());
                hints
            }

            Self::FileNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Check the path for typos".into(),
                "Run the previous pipeline stage first if the file is a stage artifact".into(),
            ],

            Self::ConfigError { message, .. } => {
                let mut hints = vec![format!("Configuration issue: {message}")];
                hints.extend(keyed_hints(message));
                hints.push("Pass --config <FILE> to use a different config file".into());
                hints
            }

            Self::Core(core_err) => {
                let mut hints = core_err.suggestions();
                hints.extend(keyed_hints(&core_err.to_string()));
                hints
            }

            Self::IoError { message, .. } => {
                let mut hints = vec![format!("I/O operation failed: {message}")];
                hints.extend(keyed_hints(message));
                hints
            }
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::FileNotFound { .. } => ErrorCategory::NotFound,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// JSON error payload for machine consumers: `{ "error", "details" }`.
    pub fn json_payload(&self) -> serde_json::Value {
        serde_json::json!({
            "error": self.to_string(),
            "details": self.suggestions(),
        })
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`] — no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Substring-keyed hints drawn from the message itself.
fn keyed_hints(message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let mut hints = Vec::new();
    if lower.contains("api key") || lower.contains("credential") {
        hints.push("Run: skillforge init --api-key <key>".into());
    }
    if lower.contains("no such file") || lower.contains("not found") {
        hints.push("Check that the path exists and is readable".into());
    }
    if lower.contains("json") || lower.contains("expected") {
        hints.push("Run: skillforge discovery --schema to see the input format".into());
    }
    if lower.contains("permission") {
        hints.push("Check file and directory permissions".into());
    }
    hints
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillforge_core::application::ApplicationError;
    use skillforge_core::domain::{ValidationError, Violation};
    use std::io;

    fn validation_error() -> CliError {
        CliError::Core(SkillforgeError::Validation(ValidationError {
            violations: vec![Violation {
                path: "problem".into(),
                message: "must be at least 10 characters".into(),
            }],
        }))
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(validation_error().exit_code(), 2);
        assert_eq!(
            CliError::InvalidInput { message: "x".into() }.exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        let err = CliError::FileNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let config = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(config.exit_code(), 4);
        let missing_key = CliError::Core(ApplicationError::MissingCredential.into());
        assert_eq!(missing_key.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn missing_credential_suggests_init() {
        let err = CliError::Core(ApplicationError::MissingCredential.into());
        assert!(err.suggestions().iter().any(|s| s.contains("skillforge init")));
    }

    #[test]
    fn validation_error_carries_violations() {
        let suggestions = validation_error().suggestions();
        assert!(suggestions.iter().any(|s| s.contains("problem")));
    }

    // ── payload & format ──────────────────────────────────────────────────

    #[test]
    fn json_payload_has_error_and_details() {
        let payload = validation_error().json_payload();
        assert!(payload["error"].is_string());
        assert!(payload["details"].is_array());
    }

    #[test]
    fn format_plain_contains_headers() {
        let s = validation_error().format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = validation_error().format_plain(true);
        assert!(!s.contains("--verbose"));
    }
}
