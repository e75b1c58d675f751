//! Application services - orchestrate the pipeline stages.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! stage use cases: analyze a business problem, select tools for it, and
//! scaffold the project.

pub mod discovery;
pub mod scaffold;
pub mod selector;
mod templates;

pub use discovery::{DiscoveryAnalyzer, DiscoverySource};
pub use scaffold::ScaffoldService;
pub use selector::{format_selection, select_tools};
