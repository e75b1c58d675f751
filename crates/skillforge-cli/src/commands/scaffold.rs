//! `skillforge scaffold` — generate the project skeleton.

use skillforge_adapters::{LocalFilesystem, builtin};
use skillforge_core::application::{ScaffoldService, select_tools};
use skillforge_core::domain::{ScaffoldResult, SelectionResult, validate_discovery_result};

use crate::{
    cli::ScaffoldArgs,
    commands::{deliver, read_json_file},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ScaffoldArgs, output: OutputManager) -> CliResult<()> {
    let value = read_json_file(&args.discovery)?;
    let discovery = validate_discovery_result(&value)
        .map_err(skillforge_core::error::SkillforgeError::from)?;

    let selection: SelectionResult = match &args.tools {
        Some(path) => {
            let value = read_json_file(path)?;
            serde_json::from_value(value).map_err(|e| CliError::InvalidInput {
                message: format!("'{}' is not a tool selection: {e}", path.display()),
            })?
        }
        None => select_tools(builtin()?, &discovery),
    };

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let result = service.scaffold(&discovery, &selection, &args.output)?;

    if args.json {
        let json = serde_json::to_string_pretty(&result).map_err(|e| CliError::InvalidInput {
            message: format!("serializing scaffold result: {e}"),
        })?;
        deliver(&json, None, &output)?;
    } else {
        render_summary(&result, &output)?;
    }
    Ok(())
}

fn render_summary(result: &ScaffoldResult, output: &OutputManager) -> CliResult<()> {
    output.success(&format!(
        "Project created at {} ({} files)",
        result.project_path.display(),
        result.files_created.len()
    ))?;
    output.print("")?;
    output.header("Next steps:")?;
    output.print(&format!("  cd {}", result.project_path.display()))?;
    output.print("  npm install")?;
    output.print("  cp .env.example .env   # then fill in:")?;
    for var in &result.env_vars {
        output.print(&format!("    {var}"))?;
    }
    Ok(())
}
