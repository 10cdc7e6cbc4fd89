//! Configuration loading and management
//!
//! Handles parsing of `crew.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Board display configuration
    #[serde(default)]
    pub board: BoardConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            board: BoardConfig::default(),
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory holding the persisted board; defaults to the
    /// platform data dir when unset
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Board display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Label shown while no teammate has been chosen
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

fn default_placeholder() -> String {
    "Select teammate".to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

impl Config {
    /// Load configuration from a `crew.toml` file
    pub fn load(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|err| Error::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the data directory, or return defaults
    pub fn load_from_dir(data_dir: &std::path::Path) -> Self {
        let config_path = data_dir.join("crew.toml");
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &PathBuf) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.board.placeholder.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "board.placeholder cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Resolve the data directory: explicit flag, then config, then the
/// platform data dir.
pub fn resolve_data_dir(flag: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }

    if let Some(dirs) = directories::ProjectDirs::from("", "", "crew") {
        let base = dirs.data_dir().to_path_buf();
        let config = Config::load_from_dir(&base);
        if let Some(dir) = config.storage.dir {
            return Ok(dir);
        }
        return Ok(base);
    }

    Err(Error::OperationFailed(
        "could not determine a data directory; pass --data-dir".to_string(),
    ))
}
