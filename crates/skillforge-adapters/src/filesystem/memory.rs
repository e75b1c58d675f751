//! In-memory filesystem for tests.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use skillforge_core::application::ApplicationError;
use skillforge_core::application::ports::Filesystem;
use skillforge_core::error::{SkillforgeError, SkillforgeResult};

#[derive(Debug, Default)]
struct Inner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    executables: HashSet<PathBuf>,
}

/// Cheap-to-clone fake. Writes require the parent directory to exist,
/// matching the local adapter's behavior.
#[derive(Debug, Default, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<Inner>>,
}

fn lock_error(path: &Path) -> SkillforgeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: "filesystem lock poisoned".to_string(),
    }
    .into()
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back a file written through the port. Test helper.
    pub fn read_file(&self, path: &Path) -> Option<String> {
        self.inner.read().ok()?.files.get(path).cloned()
    }

    pub fn is_executable(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| inner.executables.contains(path))
            .unwrap_or(false)
    }

    /// All file paths, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self
            .inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkillforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        for ancestor in path.ancestors() {
            inner.directories.insert(ancestor.to_path_buf());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SkillforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        if let Some(parent) = path.parent() {
            if !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".to_string(),
                }
                .into());
            }
        }
        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> SkillforgeResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_error(path))?;
        if !inner.files.contains_key(path) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "no such file".to_string(),
            }
            .into());
        }
        if executable {
            inner.executables.insert(path.to_path_buf());
        } else {
            inner.executables.remove(path);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .map(|inner| {
                inner.files.contains_key(path) || inner.directories.contains(path)
            })
            .unwrap_or(false)
    }
}
