//! `skillforge init` — persist the API key for later runs.

use std::path::Path;

use crate::{
    cli::InitArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let key = args
        .api_key
        .map(|k| k.trim().to_string())
        .filter(|k| !k.is_empty())
        .or_else(AppConfig::api_key)
        .ok_or_else(|| CliError::ConfigError {
            message: "no API key provided; pass --api-key or set ANTHROPIC_API_KEY".into(),
            source: None,
        })?;

    let file = AppConfig::credentials_file().ok_or_else(|| CliError::ConfigError {
        message: "could not determine the home directory".into(),
        source: None,
    })?;

    if let Some(dir) = file.parent() {
        std::fs::create_dir_all(dir).map_err(|e| CliError::IoError {
            message: format!("creating '{}'", dir.display()),
            source: e,
        })?;
    }
    write_credentials(&file, &key)?;

    output.success(&format!("API key stored in {}", file.display()))?;
    Ok(())
}

/// Write the `.env` file readable by the owner only.
fn write_credentials(file: &Path, key: &str) -> CliResult<()> {
    std::fs::write(file, format!("ANTHROPIC_API_KEY={key}\n")).map_err(|e| CliError::IoError {
        message: format!("writing '{}'", file.display()),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(file, std::fs::Permissions::from_mode(0o600)).map_err(|e| {
            CliError::IoError {
                message: format!("restricting permissions on '{}'", file.display()),
                source: e,
            }
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_file_is_owner_only() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join(".env");
        write_credentials(&file, "sk-ant-test").unwrap();
        let content = std::fs::read_to_string(&file).unwrap();
        assert_eq!(content, "ANTHROPIC_API_KEY=sk-ant-test\n");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&file).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
