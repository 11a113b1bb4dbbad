use crate::errors::AskResult;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the backend URL. This is the single
/// authoritative name; it overrides any value from the config file.
pub const API_URL_ENV: &str = "ASKBOX_API_URL";

/// Configuration for the askbox client, resolved once at startup.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AskConfig {
    /// Base URL of the backend query endpoint. There is no built-in
    /// fallback address; a missing value fails client construction.
    pub api_url: Option<String>,
    /// Default log filter when RUST_LOG is unset.
    pub log_level: Option<String>,
}

impl Default for AskConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            log_level: Some("info".to_string()),
        }
    }
}

impl AskConfig {
    /// Loads the effective configuration: the default config file if it
    /// exists, with environment variables taking precedence.
    pub fn load() -> AskResult<Self> {
        let path = get_default_config_file("askbox")?;
        let file_config = Self::load_from_file(&path)?;
        Ok(Self::default().merge(&file_config).with_env_overrides())
    }

    /// Loads configuration from a file if it exists, otherwise returns the
    /// default config
    pub fn load_from_file(path: &Path) -> AskResult<Self> {
        if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                crate::errors::AskError::ConfigError(format!("Failed to read config file: {}", e))
            })?;

            let config: Self = toml::from_str(&content).map_err(|e| {
                crate::errors::AskError::ConfigError(format!("Failed to parse config file: {}", e))
            })?;

            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Merges this config with another config, preferring values from the
    /// other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            api_url: other.api_url.clone().or_else(|| self.api_url.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }

    /// Applies environment overrides on top of this config.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = env::var(API_URL_ENV) {
            if !url.is_empty() {
                self.api_url = Some(url);
            }
        }
        self
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> AskResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        crate::errors::AskError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> AskResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}
