//! Configuration loader for membw
//!
//! Handles loading configuration from TOML files and merging with defaults.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::defaults;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "membw.toml";

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub bench: BenchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Measurement configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    #[serde(default = "default_duration_ns")]
    pub default_duration_ns: u64,
    #[serde(default = "default_sweep_min_kib")]
    pub sweep_min_kib: u64,
    #[serde(default = "default_sweep_max_kib")]
    pub sweep_max_kib: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Configuration loader
pub struct ConfigLoader {
    config_path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ConfigLoader {
            config_path: path.as_ref().to_path_buf(),
        }
    }

    /// Loads configuration from file
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.config_path.exists() {
            return Err(ConfigError::FileNotFound(
                self.config_path.display().to_string(),
            ));
        }

        let contents = fs::read_to_string(&self.config_path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Loads configuration or returns defaults if the file doesn't exist
    pub fn load_or_default(&self) -> Config {
        self.load().unwrap_or_default()
    }

    /// Saves configuration to file
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, contents)?;
        Ok(())
    }
}

/// Loads configuration from the default location
pub fn load_config() -> Config {
    ConfigLoader::new(CONFIG_FILE).load_or_default()
}

// Default functions for serde
fn default_duration_ns() -> u64 {
    defaults::DEFAULT_DURATION_NS
}

fn default_sweep_min_kib() -> u64 {
    defaults::SWEEP_MIN_KIB
}

fn default_sweep_max_kib() -> u64 {
    defaults::SWEEP_MAX_KIB
}

fn default_log_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            default_duration_ns: default_duration_ns(),
            sweep_min_kib: default_sweep_min_kib(),
            sweep_max_kib: default_sweep_max_kib(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: default_log_level(),
        }
    }
}
