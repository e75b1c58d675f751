//! Scaffold service - writes the generated project to a filesystem port.
//!
//! Not transactional: re-running over an existing directory overwrites the
//! generated files and leaves everything else alone.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::application::ApplicationError;
use crate::application::ports::Filesystem;
use crate::application::services::templates;
use crate::domain::{DiscoveryResult, ScaffoldResult, SelectionResult, slugify};
use crate::error::SkillforgeResult;

/// Orchestrates the scaffold stage over a filesystem port.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Generate the project skeleton under `output_dir`.
    #[instrument(skip_all, fields(project = %discovery.project_name, output_dir = %output_dir.display()))]
    pub fn scaffold(
        &self,
        discovery: &DiscoveryResult,
        tools: &SelectionResult,
        output_dir: &Path,
    ) -> SkillforgeResult<ScaffoldResult> {
        let slug = slugify(&discovery.project_name)?;
        let project_path = absolute(&output_dir.join(&slug))?;
        self.filesystem.create_dir_all(&project_path)?;

        let mut writer = Writer {
            filesystem: self.filesystem.as_ref(),
            root: &project_path,
            files_created: Vec::new(),
        };

        writer.write("PROJECT.md", &templates::project_doc(discovery, tools))?;
        writer.write(".env.example", &templates::env_example(tools))?;

        let agent_team = templates::agent_team(discovery);
        writer.write(
            ".agents/settings.json",
            &templates::settings_json(&agent_team, &slug),
        )?;

        for (path, content) in templates::agent_files(discovery) {
            writer.write(&path, &content)?;
        }
        for (path, content) in templates::skill_files(discovery) {
            writer.write(&path, &content)?;
        }

        writer.write(".agents/hooks/first-run-check.sh", templates::first_run_script())?;
        writer.set_executable(".agents/hooks/first-run-check.sh")?;

        let packages = tools.sdk_packages();
        writer.write("package.json", &templates::package_json(&slug, &packages))?;

        for (path, content) in templates::app_stubs(discovery, tools) {
            writer.write(&path, &content)?;
        }

        writer.write(".gitignore", templates::gitignore())?;

        // Take the file list first; it ends the writer's borrow of the path.
        let files_created = writer.files_created;
        info!(files = files_created.len(), path = %project_path.display(), "scaffold complete");

        Ok(ScaffoldResult {
            project_path,
            files_created,
            packages_to_install: packages,
            env_vars: tools
                .all
                .iter()
                .flat_map(|s| s.tool.env_vars.iter().cloned())
                .collect(),
            agent_team,
        })
    }
}

fn absolute(path: &Path) -> SkillforgeResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        ApplicationError::Filesystem {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Tracks relative paths as they are written, creating parents on demand.
struct Writer<'a> {
    filesystem: &'a dyn Filesystem,
    root: &'a Path,
    files_created: Vec<String>,
}

impl Writer<'_> {
    fn write(&mut self, relative: &str, content: &str) -> SkillforgeResult<()> {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(&path, content)?;
        self.files_created.push(relative.to_string());
        Ok(())
    }

    fn set_executable(&self, relative: &str) -> SkillforgeResult<()> {
        self.filesystem.set_permissions(&self.root.join(relative), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::selector::select_tools;
    use crate::domain::catalog::test_fixtures::catalog;
    use crate::domain::discovery::test_fixtures::result_with_channels;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory filesystem mirroring the adapter used by integration
    /// tests, kept local so core tests have no adapter dependency.
    #[derive(Default)]
    struct MemoryFs {
        files: Mutex<HashMap<PathBuf, String>>,
        executables: Mutex<Vec<PathBuf>>,
    }

    impl Filesystem for std::sync::Arc<MemoryFs> {
        fn create_dir_all(&self, _path: &Path) -> SkillforgeResult<()> {
            Ok(())
        }
        fn write_file(&self, path: &Path, content: &str) -> SkillforgeResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }
        fn set_permissions(&self, path: &Path, executable: bool) -> SkillforgeResult<()> {
            if executable {
                self.executables.lock().unwrap().push(path.to_path_buf());
            }
            Ok(())
        }
        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    fn run_scaffold() -> (ScaffoldResult, std::sync::Arc<MemoryFs>) {
        let fs = std::sync::Arc::new(MemoryFs::default());
        let discovery = result_with_channels(&["email"], &["notion workspace"]);
        let tools = select_tools(&catalog(), &discovery);
        let service = ScaffoldService::new(Box::new(fs.clone()));
        let result = service
            .scaffold(&discovery, &tools, Path::new("/tmp/out"))
            .unwrap();
        (result, fs)
    }

    #[test]
    fn scaffold_writes_the_full_file_set() {
        let (result, _) = run_scaffold();
        assert_eq!(result.project_path, PathBuf::from("/tmp/out/test"));
        for expected in [
            "PROJECT.md",
            ".env.example",
            ".agents/settings.json",
            ".agents/agents/strategy.md",
            ".agents/skills/testing-verify.md",
            ".agents/hooks/first-run-check.sh",
            "package.json",
            "src/app/layout.tsx",
            "src/app/page.tsx",
            "src/lib/env.ts",
            ".gitignore",
        ] {
            assert!(
                result.files_created.iter().any(|f| f == expected),
                "missing {expected}"
            );
        }
        // 5 agents + 10 skills + 8 fixed files
        assert_eq!(result.files_created.len(), 23);
    }

    #[test]
    fn hook_script_is_marked_executable() {
        let (result, fs) = run_scaffold();
        let script = result.project_path.join(".agents/hooks/first-run-check.sh");
        assert!(fs.executables.lock().unwrap().contains(&script));
        assert!(fs.files.lock().unwrap()[&script].starts_with("#!/bin/bash"));
    }

    #[test]
    fn settings_use_the_slug_not_the_raw_name() {
        let (result, fs) = run_scaffold();
        let settings = fs.files.lock().unwrap()
            [&result.project_path.join(".agents/settings.json")]
            .clone();
        assert!(settings.contains("Security check for test."));
    }

    #[test]
    fn env_vars_keep_duplicates_in_selection_order() {
        let (result, _) = run_scaffold();
        // supabase declares two vars, every other selected tool one or none.
        assert_eq!(result.env_vars[0], "SUPABASE_URL");
        assert_eq!(result.env_vars[1], "SUPABASE_ANON_KEY");
        assert!(result.env_vars.len() >= result.packages_to_install.len() - 1);
    }

    #[test]
    fn rerun_overwrites_without_error() {
        let fs = std::sync::Arc::new(MemoryFs::default());
        let discovery = result_with_channels(&[], &[]);
        let tools = select_tools(&catalog(), &discovery);
        let service = ScaffoldService::new(Box::new(fs));
        let first = service.scaffold(&discovery, &tools, Path::new("/tmp/out")).unwrap();
        let second = service.scaffold(&discovery, &tools, Path::new("/tmp/out")).unwrap();
        assert_eq!(first.files_created, second.files_created);
    }

    #[test]
    fn unusable_project_name_fails_before_any_write() {
        let fs = std::sync::Arc::new(MemoryFs::default());
        let mut discovery = result_with_channels(&[], &[]);
        discovery.project_name = "***".into();
        let tools = select_tools(&catalog(), &discovery);
        let service = ScaffoldService::new(Box::new(fs.clone()));
        assert!(service.scaffold(&discovery, &tools, Path::new("/tmp/out")).is_err());
        assert!(fs.files.lock().unwrap().is_empty());
    }
}
