//! Real filesystem backed by `std::fs`.

use std::fs;
use std::path::Path;

use tracing::trace;

use skillforge_core::application::ApplicationError;
use skillforge_core::application::ports::Filesystem;
use skillforge_core::error::SkillforgeResult;

/// Writes through to the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

fn map_io_error(path: &Path, e: std::io::Error) -> skillforge_core::error::SkillforgeError {
    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
    .into()
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> SkillforgeResult<()> {
        fs::create_dir_all(path).map_err(|e| map_io_error(path, e))
    }

    fn write_file(&self, path: &Path, content: &str) -> SkillforgeResult<()> {
        trace!(path = %path.display(), bytes = content.len(), "writing file");
        fs::write(path, content).map_err(|e| map_io_error(path, e))
    }

    fn set_permissions(&self, path: &Path, executable: bool) -> SkillforgeResult<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let metadata = fs::metadata(path).map_err(|e| map_io_error(path, e))?;
            let mut permissions = metadata.permissions();
            let mode = permissions.mode();
            permissions.set_mode(if executable { mode | 0o111 } else { mode & !0o111 });
            fs::set_permissions(path, permissions).map_err(|e| map_io_error(path, e))?;
        }
        #[cfg(not(unix))]
        {
            let _ = (path, executable);
        }
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
