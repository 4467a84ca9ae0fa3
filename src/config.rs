//! Configuration management for the contact book.
//!
//! The library itself never reads the environment; this is for hosts (like
//! the bundled binary) that want to size the store and pick a log level
//! from environment variables or a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::repositories::DEFAULT_CAPACITY;
use std::env;

/// Largest accepted `CONTACT_MAX_CAPACITY`.
pub const MAX_CONFIGURED_CAPACITY: usize = 1_000_000;

/// Configuration for a contact book instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of stored contacts (default: 100)
    pub max_contacts: usize,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_MAX_CAPACITY`: Maximum number of stored contacts, at most
    ///   [`MAX_CONFIGURED_CAPACITY`] (default: 100)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let max_contacts = Self::parse_env_usize("CONTACT_MAX_CAPACITY", DEFAULT_CAPACITY)?;
        if max_contacts == 0 || max_contacts > MAX_CONFIGURED_CAPACITY {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_MAX_CAPACITY".to_string(),
                reason: format!("Must be between 1 and {}", MAX_CONFIGURED_CAPACITY),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            max_contacts,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_contacts: DEFAULT_CAPACITY,
            log_level: "warn".to_string(),
        }
    }
}
