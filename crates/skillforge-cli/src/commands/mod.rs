//! Command handlers.  Thin collaborators: argument handling and rendering
//! here, pipeline logic in the core crate.

pub mod completions;
pub mod discovery;
pub mod init;
pub mod scaffold;
pub mod tools;

use std::path::Path;

use crate::error::{CliError, CliResult};
use crate::output::OutputManager;

/// Read a whole input file, mapping a missing path to `FileNotFound`.
fn read_file(path: &Path) -> CliResult<String> {
    if !path.exists() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|e| CliError::IoError {
        message: format!("reading '{}'", path.display()),
        source: e,
    })
}

/// Parse a file as JSON with a pointed error message.
fn read_json_file(path: &Path) -> CliResult<serde_json::Value> {
    let raw = read_file(path)?;
    serde_json::from_str(&raw).map_err(|e| CliError::InvalidInput {
        message: format!("'{}' is not valid JSON: {e}", path.display()),
    })
}

/// Deliver a rendered artifact: to the `--output` file when given,
/// otherwise to stdout (bypassing quiet mode, artifacts are the point).
fn deliver(content: &str, output_file: Option<&Path>, out: &OutputManager) -> CliResult<()> {
    match output_file {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| CliError::IoError {
                message: format!("writing '{}'", path.display()),
                source: e,
            })?;
            out.success(&format!("Written to {}", path.display()))?;
        }
        None => println!("{content}"),
    }
    Ok(())
}
