//! Configuration management for akademi.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory name under the user's config dir.
const APP_DIR_NAME: &str = "akademi";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `AKADEMI_`)
/// 2. TOML config file at `~/.config/akademi/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server configuration.
    pub server: ServerConfig,
    /// Storage configuration.
    pub storage: StorageConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_address: String,
    /// Port to listen on.
    pub port: u16,
    /// Largest accepted request body in bytes.
    pub max_body_bytes: usize,
    /// Path prefix for the content endpoints.
    pub api_base: String,
}

/// Storage-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the JSON data files.
    pub data_dir: PathBuf,
    /// Write default content for missing files when the server starts.
    pub seed_on_start: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3000,
            max_body_bytes: 1024 * 1024,
            api_base: "/api".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            seed_on_start: false,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// Configuration is loaded in this order (later sources override earlier):
    /// 1. Default values
    /// 2. TOML config file (if exists)
    /// 3. Environment variables (prefixed with `AKADEMI_`)
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file).nested())
            .merge(Env::prefixed("AKADEMI_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(APP_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(Error::ConfigValidation {
                message: "server.port must be greater than 0".to_string(),
            });
        }

        if self.server.max_body_bytes == 0 {
            return Err(Error::ConfigValidation {
                message: "server.max_body_bytes must be greater than 0".to_string(),
            });
        }

        if !self.server.api_base.starts_with('/') || self.server.api_base.ends_with('/') {
            return Err(Error::ConfigValidation {
                message: format!(
                    "server.api_base must start with '/' and not end with one: {}",
                    self.server.api_base
                ),
            });
        }

        if self.server.api_base.contains([':', '*']) {
            return Err(Error::ConfigValidation {
                message: format!(
                    "server.api_base must be a literal path without ':' or '*': {}",
                    self.server.api_base
                ),
            });
        }

        self.socket_addr()?;
        Ok(())
    }

    /// Get the address the server listens on.
    ///
    /// # Errors
    ///
    /// Returns an error if `bind_address` is not an IP address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server.bind_address, self.server.port)
            .parse()
            .or_else(|_| {
                // IPv6 literals need brackets when combined with a port.
                format!("[{}]:{}", self.server.bind_address, self.server.port).parse()
            })
            .map_err(|_| Error::ConfigValidation {
                message: format!("invalid bind_address: {}", self.server.bind_address),
            })
    }

    /// Get the data directory.
    #[must_use]
    pub fn data_dir(&self) -> &std::path::Path {
        &self.storage.data_dir
    }
}
