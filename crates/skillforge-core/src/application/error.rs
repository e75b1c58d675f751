//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the ports, not
//! business logic. Business rule violations are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// No API credential available. Raised before any network call.
    #[error("No API key configured")]
    MissingCredential,

    /// The completion request itself failed (transport, HTTP status).
    #[error("Completion request failed: {reason}")]
    CompletionFailed { reason: String },

    /// The model replied without any usable text block.
    #[error("No text in model response during {stage}")]
    NoTextResponse { stage: &'static str },

    /// The model's reply was not the JSON we asked for.
    #[error("Could not parse model reply during {stage}: {snippet}")]
    MalformedReply { stage: &'static str, snippet: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// The embedded tool registry failed to parse.
    #[error("Tool catalog error: {reason}")]
    Catalog { reason: String },
}

impl ApplicationError {
    /// User-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingCredential => vec![
                "Set the ANTHROPIC_API_KEY environment variable".into(),
                "Or run: skillforge init --api-key <key>".into(),
            ],
            Self::CompletionFailed { reason } => vec![
                format!("The API request failed: {reason}"),
                "Check your network connection and API key".into(),
            ],
            Self::NoTextResponse { .. } | Self::MalformedReply { .. } => vec![
                "The model returned an unexpected response".into(),
                "Re-running the command usually resolves this".into(),
            ],
            Self::Filesystem { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Catalog { .. } => vec![
                "The bundled tool catalog could not be loaded".into(),
                "Reinstall skillforge; the binary may be corrupted".into(),
            ],
        }
    }

    /// Error category for display and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingCredential => ErrorCategory::Configuration,
            Self::CompletionFailed { .. }
            | Self::NoTextResponse { .. }
            | Self::MalformedReply { .. } => ErrorCategory::Internal,
            Self::Filesystem { .. } => ErrorCategory::Internal,
            Self::Catalog { .. } => ErrorCategory::Internal,
        }
    }
}
