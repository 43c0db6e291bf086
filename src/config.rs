//! Configuration for extension-cli.
//!
//! The argument list is a verbatim pass-through contract, so configuration
//! cannot ride on CLI flags; it comes from a TOML file at a well-known
//! location (overridable via `EXTENSION_CLI_CONFIG`).

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "EXTENSION_CLI_CONFIG";

/// Main configuration structure for extension-cli.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Service backend executables.
    #[serde(default)]
    pub services: ServicesConfig,
}

/// Backend executables for the built-in commands.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServicesConfig {
    /// Executable implementing the `sdl` service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdl: Option<PathBuf>,

    /// Executable implementing the `actions-codegen` service.
    #[serde(rename = "actions-codegen", skip_serializing_if = "Option::is_none")]
    pub actions_codegen: Option<PathBuf>,
}

impl Config {
    /// Loads the configuration from the resolved path.
    pub fn load() -> Result<Self> {
        Self::load_from_file(&Self::resolve_path())
    }

    /// Loads a config file, treating a missing file as the default config.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("could not read {}: {e}", path.display()))
        })?;
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("invalid config {}: {e}", path.display())))
    }

    /// Returns the config path: the env override if set, else the default.
    pub fn resolve_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path)
    }

    /// Returns the default config file path
    /// (`<config_dir>/extension-cli/config.toml`).
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|dir| dir.join("extension-cli").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("extension-cli.toml"))
    }
}
