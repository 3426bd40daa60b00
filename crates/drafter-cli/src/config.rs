//! Configuration file management for drafter.
//!
//! Provides a TOML-based config file at `~/.config/drafter/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default. The resolved
//! value is built once at startup and injected into the pipeline; nothing
//! here is consulted again after that.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use drafter_core::GenerationConfig;
use drafter_core::model::DEFAULT_API_BASE;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub api: ApiSection,
    #[serde(default)]
    pub models: ModelsSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiSection {
    /// API key for the model provider.
    #[serde(default)]
    pub key: String,
    /// Override for the chat-completions base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ModelsSection {
    /// Model id for the plan stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<String>,
    /// Model id for the diagram stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagram: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the drafter config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/drafter` or `~/.config/drafter`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("drafter");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("drafter")
}

/// Return the path to the drafter config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix (it holds the API key).
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct DrafterConfig {
    pub api_key: String,
    pub api_base: String,
    pub generation: GenerationConfig,
}

impl DrafterConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config file > default.
    ///
    /// - API key: `cli_api_key` > `DRAFTER_API_KEY` env > `config_file.api.key` > error
    /// - API base: `cli_api_base` > `DRAFTER_API_BASE` env > `config_file.api.base_url` > hosted default
    /// - Model ids: `config_file.models.*` > `gpt-4o-mini`
    pub fn resolve(cli_api_key: Option<&str>, cli_api_base: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        // API key resolution.
        let api_key = if let Some(key) = cli_api_key {
            key.to_string()
        } else if let Ok(key) = std::env::var("DRAFTER_API_KEY") {
            key
        } else if let Some(key) = file_config
            .as_ref()
            .map(|cfg| cfg.api.key.clone())
            .filter(|key| !key.is_empty())
        {
            key
        } else {
            bail!(
                "API key not found; set DRAFTER_API_KEY or run `drafter init` to create a config file"
            );
        };

        // API base resolution.
        let api_base = if let Some(base) = cli_api_base {
            base.to_string()
        } else if let Ok(base) = std::env::var("DRAFTER_API_BASE") {
            base
        } else if let Some(base) = file_config.as_ref().and_then(|cfg| cfg.api.base_url.clone()) {
            base
        } else {
            DEFAULT_API_BASE.to_string()
        };

        // Model id resolution.
        let defaults = GenerationConfig::default();
        let models = file_config.map(|cfg| cfg.models).unwrap_or_default();
        let generation = GenerationConfig {
            plan_model: models.plan.unwrap_or(defaults.plan_model),
            diagram_model: models.diagram.unwrap_or(defaults.diagram_model),
        };

        Ok(Self {
            api_key,
            api_base,
            generation,
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
