// File: crates/energy-dashboard/src/config.rs
// Summary: Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file searched in the working directory.
pub const CONFIG_FILE: &str = "energy-dashboard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub charts: ChartsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/api".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    /// Where rendered chart images and exports are written.
    pub output_dir: PathBuf,
    /// Device pixel ratio applied to every chart surface.
    pub pixel_ratio: f32,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("target/out"),
            pixel_ratio: 1.0,
        }
    }
}

impl Config {
    /// Load configuration from an explicit file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `energy-dashboard.toml` from the working directory, falling
    /// back to defaults when it does not exist.
    pub fn load_default() -> Self {
        Self::load(CONFIG_FILE).unwrap_or_default()
    }
}
