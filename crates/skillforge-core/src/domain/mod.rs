//! Domain layer: the data model of the pipeline.
//!
//! Everything in here is plain data plus pure functions. The three stage
//! artifacts (`DiscoveryResult`, `SelectionResult`, `ScaffoldResult`) are
//! designed to round-trip through JSON unchanged so they can be persisted
//! between stages.

pub mod catalog;
pub mod discovery;
pub mod error;
pub mod scaffold;
pub mod schema;
pub mod selection;

pub use catalog::{GdprInfo, Tool, ToolCatalog, ToolCategory};
pub use discovery::{
    BusinessContext, DeliveryLayer, DiscoveryInput, DiscoveryResult, EiidMapping, EnrichmentLayer,
    ForWhom, InferenceLayer, InterpretationLayer, StrategicAnalysis,
};
pub use error::{DomainError, ErrorCategory};
pub use scaffold::{
    AgentTeamConfig, HookEntry, HookGroup, HookSettings, ScaffoldResult, SkillConfig, slugify,
};
pub use schema::{
    ValidationError, Violation, input_json_schema, validate_discovery_result, validate_input,
};
pub use selection::{SelectionResult, ToolSuggestion};
