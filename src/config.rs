//! Configuration management for the advocate search server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the
//! .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;

/// Where searches are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchBackend {
    /// Compile the query and let the store filter rows
    #[default]
    Store,
    /// Load every record and apply the predicate in memory
    InMemory,
}

impl SearchBackend {
    /// Parse a backend name (`store` or `memory`).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "store" | "sql" => Some(Self::Store),
            "memory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            _ => None,
        }
    }
}

impl fmt::Display for SearchBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::InMemory => write!(f, "memory"),
        }
    }
}

/// Configuration for the advocate search server.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database path (default: ":memory:")
    pub db_path: String,

    /// Search evaluation backend (default: store)
    pub search_backend: SearchBackend,

    /// Insert the seed directory when the store is empty (default: true)
    pub seed_on_start: bool,

    /// Log level used when RUST_LOG is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADVOCATE_DB_PATH`: SQLite file path (default: ":memory:")
    /// - `SEARCH_BACKEND`: "store" or "memory" (default: "store")
    /// - `SEED_ON_START`: seed an empty store at startup (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let db_path = env::var("ADVOCATE_DB_PATH").unwrap_or_else(|_| ":memory:".to_string());
        if db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADVOCATE_DB_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let search_backend = match env::var("SEARCH_BACKEND") {
            Ok(val) => SearchBackend::parse(&val).ok_or_else(|| ConfigError::InvalidValue {
                var: "SEARCH_BACKEND".to_string(),
                reason: format!("Must be 'store' or 'memory', got: {}", val),
            })?,
            Err(_) => SearchBackend::default(),
        };

        let seed_on_start = Self::parse_env_bool("SEED_ON_START", true)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            db_path,
            search_backend,
            seed_on_start,
            log_level,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => Ok(true),
                "false" | "0" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: ":memory:".to_string(),
            search_backend: SearchBackend::default(),
            seed_on_start: true,
            log_level: "error".to_string(),
        }
    }
}
