//! Configuration for ticklist.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

const CONFIG_DIR: &str = "ticklist";
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration loaded from `config.toml` under the platform
/// config directory.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage settings block.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct StorageConfig {
    /// Task file location, overriding the platform default.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load the configuration, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        default_config_path().map_or_else(|| Ok(Self::default()), |path| Self::load_from(&path))
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}
