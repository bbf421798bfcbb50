//! Configuration loading and parsing

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration (loaded from config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(default = "default_results_file")]
    pub results_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            results_file: default_results_file(),
        }
    }
}

fn default_results_file() -> PathBuf {
    PathBuf::from("results.txt")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Decimal places for values and marks
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Timed events shown and entered as minutes:seconds
    #[serde(default = "default_split_time_events")]
    pub split_time_events: Vec<String>,
    /// Width in characters of the longest progression bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            decimals: default_decimals(),
            split_time_events: default_split_time_events(),
            chart_width: default_chart_width(),
        }
    }
}

impl DisplayConfig {
    pub fn is_split_time(&self, event: &str) -> bool {
        self.split_time_events.iter().any(|name| name == event)
    }
}

fn default_decimals() -> usize {
    2
}

fn default_split_time_events() -> Vec<String> {
    ["800m", "1500m", "5000m", "10000m", "3000mSC"]
        .iter()
        .map(|name| name.to_string())
        .collect()
}

fn default_chart_width() -> usize {
    40
}

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    log::debug!("Configuration loaded from {:?}", path);
    Ok(config)
}
