//! ttsolve configuration
//!
//! Loaded from `ttsolve.yaml` in the working directory, or from a file
//! named with `--config`. Every field has a default, so an empty file is
//! a valid configuration.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "ttsolve.yaml";

/// Supported configuration schema version
pub const CONFIG_VERSION: u32 = 1;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Schema version for migrations
    #[serde(default = "default_version")]
    pub version: u32,

    /// Verilog generation settings
    #[serde(default)]
    pub render: RenderConfig,

    /// CLI output settings
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CONFIG_VERSION,
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

/// Settings for the Verilog module and testbench
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Name of the generated module; the testbench appends `_tb`
    #[serde(default = "default_module_name")]
    pub module_name: String,

    /// Name of the single output port
    #[serde(default = "default_output_name")]
    pub output_name: String,

    /// Delay between testbench vectors, in timescale units
    #[serde(default = "default_step_delay")]
    pub step_delay: u32,
}

fn default_module_name() -> String {
    "logic_circuit".to_string()
}

fn default_output_name() -> String {
    "Y".to_string()
}

fn default_step_delay() -> u32 {
    10
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            module_name: default_module_name(),
            output_name: default_output_name(),
            step_delay: default_step_delay(),
        }
    }
}

/// Output format of the `solve` command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_norway rejects an empty document; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_norway::from_str(yaml)
            .map_err(|e| Error::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "Unsupported configuration version: {}",
                config.version
            )));
        }

        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content)
    }

    /// Load `ttsolve.yaml` from a directory, if present
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }
        Self::load(&config_file).map(Some)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}
