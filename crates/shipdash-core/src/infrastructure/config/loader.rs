use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;

use super::schema::DashboardConfig;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type ConfigLoadResult<T> = Result<T, ConfigLoadError>;

pub struct ConfigLoader;

impl ConfigLoader {
    pub fn discover_config_path() -> PathBuf {
        if let Ok(path) = std::env::var("SHIPDASH_CONFIG_PATH") {
            tracing::debug!("Using config path from SHIPDASH_CONFIG_PATH: {}", path);
            return PathBuf::from(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("shipdash").join("config.toml");
            if path.exists() {
                tracing::debug!("Using config path: {}", path.display());
                return path;
            }
        }

        let fallback = PathBuf::from("shipdash.toml");
        tracing::debug!("Using fallback config path: {}", fallback.display());
        fallback
    }

    pub fn load_default() -> ConfigLoadResult<DashboardConfig> {
        Self::load(&Self::discover_config_path())
    }

    pub fn load(path: &Path) -> ConfigLoadResult<DashboardConfig> {
        let raw = std::fs::read_to_string(path)?;
        let config: DashboardConfig = toml::from_str(&raw)?;
        config.validate().map_err(ConfigLoadError::InvalidConfig)?;

        tracing::debug!(path = %path.display(), "Loaded dashboard configuration");
        Ok(config)
    }
}
