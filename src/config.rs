//! Configuration file support for bom-rollup.
//!
//! Provides YAML-based configuration through a `bom-rollup.config.yml` file
//! in the working directory, and resolves it together with the CLI argument
//! into the effective run settings.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::{DEFAULT_API_HOST, DEFAULT_REQUEST_TIMEOUT_SECS};
use crate::application::dto::DEFAULT_OUTPUT_FILENAME;
use crate::shared::error::RollupError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bom-rollup.config.yml";

/// Default append-mode log file
pub const DEFAULT_LOG_FILENAME: &str = "roll_up.error.log";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_host: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub output: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub cache_part_numbers: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_not_symlink(path, "config read")?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| RollupError::ConfigError {
            path: path.to_path_buf(),
            details: format!(
                "{}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                e
            ),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref host) = config.api_host {
        if !(host.starts_with("http://") || host.starts_with("https://")) {
            bail!(
                "Invalid config: api_host must start with http:// or https:// (got '{}').",
                host
            );
        }
    }

    if config.request_timeout_secs == Some(0) {
        bail!(
            "Invalid config: request_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default of {} seconds.",
            DEFAULT_REQUEST_TIMEOUT_SECS
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_host: String,
    pub request_timeout: Duration,
    pub output: PathBuf,
    pub log_file: PathBuf,
    pub cache_part_numbers: bool,
}

impl Settings {
    /// Merges the CLI argument, the config file and built-in defaults
    ///
    /// Precedence: CLI > config file > default.
    pub fn resolve(cli_output: Option<PathBuf>, config: Option<ConfigFile>) -> Self {
        let config = config.unwrap_or_default();

        Self {
            api_host: config
                .api_host
                .unwrap_or_else(|| DEFAULT_API_HOST.to_string()),
            request_timeout: Duration::from_secs(
                config
                    .request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
            output: cli_output
                .or(config.output)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILENAME)),
            log_file: config
                .log_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILENAME)),
            cache_part_numbers: config.cache_part_numbers.unwrap_or(true),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
