//! `skillforge tools` — tool selection for a discovery result.

use skillforge_adapters::builtin;
use skillforge_core::application::{format_selection, select_tools};
use skillforge_core::domain::validate_discovery_result;

use crate::{
    cli::ToolsArgs,
    commands::{deliver, read_json_file},
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: ToolsArgs, output: OutputManager) -> CliResult<()> {
    let catalog = builtin()?;

    if args.catalog {
        let json = serde_json::to_string_pretty(catalog).map_err(|e| CliError::InvalidInput {
            message: format!("serializing catalog: {e}"),
        })?;
        deliver(&json, args.output.as_deref(), &output)?;
        return Ok(());
    }

    let input = args.input.as_deref().ok_or_else(|| CliError::InvalidInput {
        message: "no discovery result given; pass --input <file>".into(),
    })?;
    let value = read_json_file(input)?;
    let discovery = validate_discovery_result(&value)
        .map_err(skillforge_core::error::SkillforgeError::from)?;

    let selection = select_tools(catalog, &discovery);

    if args.json || args.output.is_some() {
        let json = serde_json::to_string_pretty(&selection).map_err(|e| CliError::InvalidInput {
            message: format!("serializing selection: {e}"),
        })?;
        deliver(&json, args.output.as_deref(), &output)?;
    } else {
        output.header(&format!("Recommended tools: {}", discovery.project_name))?;
        output.print("")?;
        output.print(&format_selection(&selection))?;
    }
    Ok(())
}
