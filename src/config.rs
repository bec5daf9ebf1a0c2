//! Server configuration
//!
//! Values come from built-in defaults, optionally overlaid by a YAML file,
//! then by `SYNTAXGRAPH_*` environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::Level;

pub const ENV_ADDRESS: &str = "SYNTAXGRAPH_ADDRESS";
pub const ENV_PORT: &str = "SYNTAXGRAPH_PORT";
pub const ENV_LOG: &str = "SYNTAXGRAPH_LOG";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Maximum log level ("error", "warn", "info", "debug" or "trace")
    pub log_level: String,
    /// Model selected at startup if present
    pub default_model: String,
    /// Allow cross-origin requests
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            default_model: "basic".to_string(),
            cors: true,
        }
    }
}

fn parse_level(level: &str) -> ConfigResult<Level> {
    level
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidLogLevel(level.to_string()))
}

impl ServerConfig {
    /// Parse YAML; missing keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.max_level()?;
        Ok(config)
    }

    /// Load YAML from a file
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> ConfigResult<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(address) = lookup(ENV_ADDRESS) {
            self.address = address;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }
        if let Some(level) = lookup(ENV_LOG) {
            parse_level(&level)?;
            self.log_level = level;
        }
        Ok(())
    }

    /// Tracing level named by `log_level`
    pub fn max_level(&self) -> ConfigResult<Level> {
        parse_level(&self.log_level)
    }

    /// Address the listener binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}
