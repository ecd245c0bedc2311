// Configuration Module
// Handles configuration from files and command-line overrides.

use crate::limiter::StopUnit;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Generator configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Reject values the generator cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.generation.target == 0 {
            return Err(ConfigError::Validation(
                "\"number\" should be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// What to generate and how much of it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Unit the target is measured in
    #[serde(default)]
    pub unit: StopUnit,
    /// How many units to generate
    #[serde(default = "default_target")]
    pub target: usize,
    /// Start with "Lorem ipsum dolor sit amet..."
    #[serde(default)]
    pub start_with_lorem: bool,
    /// Fixed seed for reproducible output
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_target() -> usize {
    5
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            unit: StopUnit::default(),
            target: default_target(),
            start_with_lorem: false,
            seed: None,
        }
    }
}

/// Statistics reporting
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Print statistics after the text
    #[serde(default)]
    pub stats: bool,
    #[serde(default)]
    pub stats_format: StatsFormat,
}

/// How statistics are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(String),
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}
