use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::Config;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

const APP_DIR: &str = "swatchgrid";
const LOCAL_DIR: &str = ".swatchgrid";
const FILE_NAME: &str = "config.toml";

/// Path of the global config file (~/.config/swatchgrid/config.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join(FILE_NAME))
}

/// Load a config file from an explicit path
pub fn load_config_file(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

fn load_global_config() -> Result<Option<Config>, ConfigError> {
    match global_config_path() {
        Some(path) if path.exists() => load_config_file(&path).map(Some),
        _ => Ok(None),
    }
}

/// Load local config from .swatchgrid/config.toml in `start_path` or its
/// parents
pub fn load_local_config(start_path: &Path) -> Result<Option<Config>, ConfigError> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(LOCAL_DIR).join(FILE_NAME);
        if config_path.exists() {
            return load_config_file(&config_path).map(Some);
        }

        if !current.pop() {
            break;
        }
    }

    Ok(None)
}

/// Load and merge configs (global + local)
pub fn load_config() -> Result<Config, ConfigError> {
    let current_dir = std::env::current_dir()?;

    let global = load_global_config()?.unwrap_or_default();
    let local = load_local_config(&current_dir)?.unwrap_or_default();

    Ok(global.merge(local))
}
