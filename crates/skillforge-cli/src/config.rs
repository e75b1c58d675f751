//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`SKILLFORGE_MODEL`)
//! 3. Config file (`--config` path or the default location)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEFAULT_MODEL: &str = "claude-sonnet-4-5";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Model id sent to the completion API.
    pub model: String,
    /// Base URL override, for proxies and tests.
    pub api_base_url: Option<String>,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_base_url: None,
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: file (if present), then env overrides.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);

        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file '{}'", path.display()))?;
            toml::from_str(&raw)
                .with_context(|| format!("parsing config file '{}'", path.display()))?
        } else if config_file.is_some() {
            // An explicitly passed path must exist.
            anyhow::bail!("config file '{}' not found", path.display());
        } else {
            Self::default()
        };

        if let Ok(model) = std::env::var("SKILLFORGE_MODEL") {
            if !model.trim().is_empty() {
                config.model = model.trim().to_string();
            }
        }

        Ok(config)
    }

    /// Path to the default configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "skillforge", "skillforge")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".skillforge.toml"))
    }

    /// Directory holding the persisted credentials (`~/.skillforge`).
    pub fn credentials_dir() -> Option<PathBuf> {
        directories::UserDirs::new().map(|d| d.home_dir().join(".skillforge"))
    }

    /// The persisted `.env` file written by `skillforge init`.
    pub fn credentials_file() -> Option<PathBuf> {
        Self::credentials_dir().map(|d| d.join(".env"))
    }

    /// The API key from the environment, if set and non-empty.
    pub fn api_key() -> Option<String> {
        std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }
}

/// Load the persisted credentials file into the environment.  Variables
/// already set win, matching dotenvy's default behavior.
pub fn load_persisted_env(file: Option<&Path>) {
    if let Some(path) = file {
        let _ = dotenvy::from_path(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_model_is_set() {
        assert_eq!(AppConfig::default().model, DEFAULT_MODEL);
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert!(!cfg.model.is_empty());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/skillforge.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = \"claude-test\"\n[output]\nno_color = true\n").unwrap();
        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.model, "claude-test");
        assert!(cfg.output.no_color);
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
