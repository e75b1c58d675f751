//! Application layer for Skillforge.
//!
//! This layer contains:
//! - **Services**: stage orchestration (DiscoveryAnalyzer, select_tools,
//!   ScaffoldService)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{
    DiscoveryAnalyzer, DiscoverySource, ScaffoldService, format_selection, select_tools,
};

pub use ports::{Filesystem, TextCompletion};

pub use error::ApplicationError;
