//! Unified error handling for Skillforge Core.
//!
//! One root type wraps the layer errors so callers match on a single enum
//! and still get per-layer suggestions and categories.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::schema::ValidationError;
use crate::domain::DomainError;

pub use crate::domain::error::ErrorCategory;

/// Root error type for Skillforge Core operations.
#[derive(Debug, Error, Clone)]
pub enum SkillforgeError {
    /// Structural input defects, pre-I/O.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SkillforgeError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Validation(e) => {
                let mut out: Vec<String> = e
                    .violations
                    .iter()
                    .map(|v| format!("{}: {}", v.path, v.message))
                    .collect();
                out.push("Try: skillforge discovery --schema".into());
                out
            }
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your setup and try again".into(),
            ],
            Self::Internal { .. } => vec![
                "This appears to be a bug in Skillforge".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Error category for display styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) => ErrorCategory::Validation,
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Convenient result type alias.
pub type SkillforgeResult<T> = Result<T, SkillforgeError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::Violation;

    #[test]
    fn validation_wrapper_keeps_violation_paths_in_suggestions() {
        let err: SkillforgeError = ValidationError::new(vec![Violation {
            path: "projectName".into(),
            message: "is required".into(),
        }])
        .into();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions()[0].starts_with("projectName: "));
    }

    #[test]
    fn application_errors_keep_their_category() {
        let err: SkillforgeError = ApplicationError::MissingCredential.into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
