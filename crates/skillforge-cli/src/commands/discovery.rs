//! `skillforge discovery` — analyze a business problem.

use std::io::Read as _;
use std::path::Path;

use skillforge_adapters::AnthropicClient;
use skillforge_core::application::{DiscoveryAnalyzer, DiscoverySource};
use skillforge_core::domain::{DiscoveryResult, input_json_schema};

use crate::{
    cli::DiscoveryArgs,
    commands::{deliver, read_file},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub async fn execute(args: DiscoveryArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.schema {
        let schema = serde_json::to_string_pretty(&input_json_schema())
            .map_err(|e| CliError::InvalidInput {
                message: e.to_string(),
            })?;
        println!("{schema}");
        return Ok(());
    }

    let source = resolve_source(&args)?;

    let client = AnthropicClient::with_base_url(
        AppConfig::api_key().as_deref(),
        &config.model,
        config.api_base_url.as_deref(),
    );
    let analyzer = DiscoveryAnalyzer::new(&client);

    // Progress goes to stdout, so keep it out of JSON-mode pipes.
    if !args.json {
        output.info("Running discovery analysis...")?;
    }
    let result = analyzer.analyze(source).await?;

    let json = serde_json::to_string_pretty(&result).map_err(|e| CliError::InvalidInput {
        message: format!("serializing discovery result: {e}"),
    })?;

    if args.json || args.output.is_some() {
        deliver(&json, args.output.as_deref(), &output)?;
    } else {
        render_summary(&result, &output)?;
        output.info("Pass --json or -o <file> to capture the full result")?;
    }
    Ok(())
}

/// Decide where the discovery input comes from.
///
/// A `.json` file (or any file whose content parses as a JSON object) is
/// treated as structured input; everything else goes through the model's
/// extraction round-trip.  Without `--input`, JSON mode reads stdin.
fn resolve_source(args: &DiscoveryArgs) -> CliResult<DiscoverySource> {
    if let Some(path) = &args.input {
        let content = read_file(path)?;
        return Ok(classify_input(path, content));
    }

    if args.json {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::IoError {
                message: "reading stdin".into(),
                source: e,
            })?;
        let value = serde_json::from_str(&content).map_err(|e| CliError::InvalidInput {
            message: format!("stdin is not valid JSON: {e}"),
        })?;
        return Ok(DiscoverySource::Json(value));
    }

    Err(CliError::InvalidInput {
        message: "no input given; pass --input <file> or pipe JSON with --json".into(),
    })
}

fn classify_input(path: &Path, content: String) -> DiscoverySource {
    let looks_like_json = path.extension().is_some_and(|e| e == "json");
    if looks_like_json {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&content) {
            if value.is_object() {
                return DiscoverySource::Json(value);
            }
        }
    }
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    DiscoverySource::File { name, content }
}

fn render_summary(result: &DiscoveryResult, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("Discovery: {}", result.project_name))?;
    output.print("")?;
    output.print(&format!(
        "Target position: {}",
        result.strategic_analysis.target_position
    ))?;
    output.print("Opportunities:")?;
    for opportunity in &result.strategic_analysis.opportunities {
        output.print(&format!("  - {opportunity}"))?;
    }
    output.print(&format!(
        "Delivery channels: {}",
        result.eiid_mapping.delivery.channels.join(", ")
    ))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn json_file_with_object_is_structured() {
        let source = classify_input(Path::new("input.json"), r#"{"projectName":"x"}"#.into());
        assert!(matches!(source, DiscoverySource::Json(_)));
    }

    #[test]
    fn markdown_file_goes_through_extraction() {
        let source = classify_input(Path::new("notes.md"), "# Notes\nwe lose orders".into());
        match source {
            DiscoverySource::File { name, .. } => assert_eq!(name, "notes.md"),
            other => panic!("unexpected source: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_file_falls_back_to_extraction() {
        let source = classify_input(Path::new("broken.json"), "{not json".into());
        assert!(matches!(source, DiscoverySource::File { .. }));
    }

    #[test]
    fn no_input_without_json_mode_is_rejected() {
        let args = DiscoveryArgs {
            input: None,
            output: None,
            json: false,
            schema: false,
        };
        assert!(matches!(
            resolve_source(&args),
            Err(CliError::InvalidInput { .. })
        ));
    }

    #[test]
    fn missing_input_file_is_not_found() {
        let args = DiscoveryArgs {
            input: Some(PathBuf::from("/definitely/missing.json")),
            output: None,
            json: false,
            schema: false,
        };
        assert!(matches!(
            resolve_source(&args),
            Err(CliError::FileNotFound { .. })
        ));
    }
}
