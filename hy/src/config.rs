//! Configuration for Hyperion

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path to the task file
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    match dirs::data_local_dir() {
        Some(dir) => dir.join("hyperion").join(crate::DEFAULT_DATA_FILE_NAME),
        None => PathBuf::from("data").join(crate::DEFAULT_DATA_FILE_NAME),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

impl Config {
    /// Load config from file, or use defaults
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            return Self::read(config_path);
        }

        // Try default locations
        let default_paths = [
            dirs::config_dir().map(|p| p.join("hyperion").join("config.yml")),
            Some(PathBuf::from("hyperion.yml")),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                return Self::read(path);
            }
        }

        Ok(Config::default())
    }

    fn read(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).context(format!("Failed to read config: {}", path.display()))?;
        let config: Config =
            serde_yaml::from_str(&content).context(format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }
}
