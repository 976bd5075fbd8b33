//! Configuration loading for the Whiskers API.
//!
//! Loads layered `.env` files and environment variables prefixed with
//! `WHISKERS_`, producing a typed [`AppConfig`].

use std::{collections::BTreeMap, env, net::SocketAddr, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Application configuration derived from `WHISKERS_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct AppConfig {
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_api_bind_addr")]
    pub api_bind_addr: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_format")]
    pub log_format: String,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,
    #[serde(default = "default_db_acquire_timeout_ms")]
    pub db_acquire_timeout_ms: u64,
    /// Directory uploaded images are written to and served back from.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Maximum accepted size of a single uploaded image, in bytes.
    #[serde(default = "default_upload_max_bytes")]
    pub upload_max_bytes: usize,
}

impl AppConfig {
    /// Returns the configured bind address as a socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        self.api_bind_addr.parse()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            api_bind_addr: default_api_bind_addr(),
            log_level: default_log_level(),
            log_format: default_log_format(),
            database_url: default_database_url(),
            db_max_connections: default_db_max_connections(),
            db_acquire_timeout_ms: default_db_acquire_timeout_ms(),
            upload_dir: default_upload_dir(),
            upload_max_bytes: default_upload_max_bytes(),
        }
    }
}

fn default_profile() -> String {
    "dev".to_string()
}

fn default_api_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_database_url() -> String {
    "sqlite://whiskers.db?mode=rwc".to_string()
}

fn default_db_max_connections() -> u32 {
    10
}

fn default_db_acquire_timeout_ms() -> u64 {
    5_000
}

fn default_upload_dir() -> String {
    "public/uploads".to_string()
}

fn default_upload_max_bytes() -> usize {
    5 * 1024 * 1024
}

/// Errors raised while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("upload max bytes must be positive")]
    InvalidUploadMaxBytes,
    #[error("failed to read env file '{path}': {message}")]
    EnvFile { path: String, message: String },
}

/// Loads configuration using layered `.env` files and `WHISKERS_*` env vars.
///
/// Layering order (later wins): `.env`, `.env.<profile>`, process
/// environment.
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a new loader rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Creates a loader rooted at the provided directory (useful for tests).
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Loads and validates the application configuration.
    pub fn load(&self) -> Result<AppConfig, ConfigError> {
        let mut layered = self.read_env_file(".env")?;

        let profile = env::var("WHISKERS_PROFILE")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| layered.get("PROFILE").cloned())
            .unwrap_or_else(default_profile);

        for (key, value) in self.read_env_file(&format!(".env.{}", profile))? {
            layered.insert(key, value);
        }

        // Overlay process environment last so it wins.
        for (key, value) in env::vars() {
            if let Some(stripped) = key.strip_prefix("WHISKERS_") {
                layered.insert(stripped.to_string(), value);
            }
        }

        let api_bind_addr = layered
            .remove("API_BIND_ADDR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_api_bind_addr);
        let log_level = layered
            .remove("LOG_LEVEL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_level);
        let log_format = layered
            .remove("LOG_FORMAT")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_log_format);
        let database_url = layered
            .remove("DATABASE_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_database_url);
        let db_max_connections = layered
            .remove("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_db_max_connections);
        let db_acquire_timeout_ms = layered
            .remove("DB_ACQUIRE_TIMEOUT_MS")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_db_acquire_timeout_ms);
        let upload_dir = layered
            .remove("UPLOAD_DIR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_upload_dir);
        let upload_max_bytes = layered
            .remove("UPLOAD_MAX_BYTES")
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_upload_max_bytes);

        let config = AppConfig {
            profile,
            api_bind_addr,
            log_level,
            log_format,
            database_url,
            db_max_connections,
            db_acquire_timeout_ms,
            upload_dir,
            upload_max_bytes,
        };

        if let Err(source) = config.bind_addr() {
            return Err(ConfigError::InvalidBindAddr {
                value: config.api_bind_addr.clone(),
                source,
            });
        }

        if config.upload_max_bytes == 0 {
            return Err(ConfigError::InvalidUploadMaxBytes);
        }

        Ok(config)
    }

    /// Reads `WHISKERS_*` entries from a dotenv file without touching the
    /// process environment. A missing file yields an empty map.
    fn read_env_file(&self, name: &str) -> Result<BTreeMap<String, String>, ConfigError> {
        let path = self.base_dir.join(name);
        let mut entries = BTreeMap::new();

        if !path.exists() {
            return Ok(entries);
        }

        let iter = dotenvy::from_path_iter(&path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        for item in iter {
            let (key, value) = item.map_err(|e| ConfigError::EnvFile {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
            if let Some(stripped) = key.strip_prefix("WHISKERS_") {
                entries.insert(stripped.to_string(), value);
            }
        }

        Ok(entries)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
