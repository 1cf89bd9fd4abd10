use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "semvr.toml";

/// The semvr configuration file structure (semvr.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SemvrConfig {
    /// Defaults for `semvr bump`
    pub bump: BumpConfig,

    /// Defaults for listing output
    pub output: OutputConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BumpConfig {
    /// Keep pre-release and build metadata when bumping
    pub keep_suffixes: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sort in descending order
    pub reverse: bool,
}

impl SemvrConfig {
    /// Find semvr.toml by searching upward from the given directory
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.is_file() {
                return Some(config_path);
            }

            // Reached filesystem root, no config found
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from semvr.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let Some(config_path) = Self::find(start_dir) else {
            log::debug!("No {} found above {}", CONFIG_FILE_NAME, start_dir.display());
            return Ok(None);
        };

        log::debug!("Reading {}", config_path.display());
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: SemvrConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        Ok(Some(config))
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }
}
