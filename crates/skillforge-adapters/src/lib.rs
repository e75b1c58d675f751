//! Infrastructure adapters for Skillforge.
//!
//! Implements the driven ports defined in `skillforge-core`:
//! - `anthropic::AnthropicClient` — the `TextCompletion` port over the
//!   Anthropic Messages API
//! - `filesystem::LocalFilesystem` / `filesystem::MemoryFilesystem` — the
//!   `Filesystem` port
//! - `catalog` — the embedded tool registry

pub mod anthropic;
pub mod catalog;
pub mod filesystem;

pub use anthropic::AnthropicClient;
pub use catalog::builtin;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
