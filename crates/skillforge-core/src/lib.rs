//! Skillforge Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Skillforge
//! pipeline (discovery → tool selection → scaffold), following hexagonal
//! (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         skillforge-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (DiscoveryAnalyzer, select_tools,       │
//! │  ScaffoldService)                       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: TextCompletion, Filesystem)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   skillforge-adapters (Infrastructure)  │
//! │ (AnthropicClient, LocalFilesystem, …)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Domain Layer (Pure Logic)         │
//! │ (DiscoveryInput, ToolCatalog,           │
//! │  SelectionResult)                       │
//! │       No External Dependencies          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Each pipeline stage consumes the previous stage's output as a plain data
//! object that round-trips through JSON, so any stage can be driven from a
//! persisted artifact instead of the stage before it.

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DiscoveryAnalyzer, DiscoverySource, ScaffoldService, select_tools,
        ports::{Filesystem, TextCompletion},
    };
    pub use crate::domain::{
        AgentTeamConfig, BusinessContext, DiscoveryInput, DiscoveryResult, EiidMapping, ForWhom,
        ScaffoldResult, SelectionResult, StrategicAnalysis, Tool, ToolCatalog, ToolCategory,
        ToolSuggestion, ValidationError,
    };
    pub use crate::error::{SkillforgeError, SkillforgeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
