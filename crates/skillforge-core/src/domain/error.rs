//! Domain-level errors.
//!
//! All errors are:
//! - Cloneable (artifacts may be re-validated on reload)
//! - Categorizable (for CLI display and exit codes)
//! - Actionable (provide suggestions)

use thiserror::Error;

/// Errors raised by pure domain operations.
///
/// Structural input problems are a [`super::schema::ValidationError`]
/// instead — this type covers everything else the domain can reject.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Project name '{name}' produces an empty directory slug")]
    UnusableProjectName { name: String },

    #[error("No tool with id '{id}' in the catalog")]
    UnknownTool { id: String },

    #[error("No stack named '{id}' in the catalog")]
    UnknownStack { id: String },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnusableProjectName { name } => vec![
                format!("'{name}' contains no letters or digits"),
                "Pick a project name with at least one alphanumeric character".into(),
            ],
            Self::UnknownTool { id } => vec![
                format!("Tool id: {id}"),
                "Try: skillforge tools --catalog".into(),
            ],
            Self::UnknownStack { id } => vec![
                format!("Stack id: {id}"),
                "Try: skillforge tools --catalog".into(),
            ],
        }
    }

    /// Error category for CLI display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnusableProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownTool { .. } | Self::UnknownStack { .. } => ErrorCategory::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}
