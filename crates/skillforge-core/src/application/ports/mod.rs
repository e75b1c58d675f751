//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `skillforge-adapters` implement
//! these.

use std::path::Path;

use async_trait::async_trait;

use crate::error::SkillforgeResult;

/// Port for text completion against an external language model.
///
/// Implemented by:
/// - `skillforge_adapters::anthropic::AnthropicClient` (production)
/// - test stubs returning canned replies
///
/// One call, one prompt, one text reply. Conversation state, retries and
/// streaming are deliberately outside this port.
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Submit a prompt and return the model's text reply.
    async fn complete(&self, prompt: &str, max_tokens: u32) -> SkillforgeResult<String>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `skillforge_adapters::filesystem::LocalFilesystem` (production)
/// - `skillforge_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> SkillforgeResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> SkillforgeResult<()>;

    /// Mark a file executable (or not). Capability-based, not Unix-specific.
    fn set_permissions(&self, path: &Path, executable: bool) -> SkillforgeResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
