//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! Contacts themselves are never read from or written to disk; configuration only
//! tunes logging and the `search` command.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of `search` results to show (default: 5)
    pub max_search_results: usize,

    /// Minimum `search` confidence, 0-100 (default: 30)
    pub match_threshold: u8,

    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_MAX_SEARCH_RESULTS`: Max search results (default: 5)
    /// - `CONTACT_BOOK_MATCH_THRESHOLD`: Min search confidence (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let max_search_results = Self::parse_env_usize("CONTACT_BOOK_MAX_SEARCH_RESULTS", 5)?;
        if max_search_results == 0 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_MAX_SEARCH_RESULTS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let match_threshold = Self::parse_env_u8("CONTACT_BOOK_MATCH_THRESHOLD", 30)?;
        if match_threshold > 100 {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_MATCH_THRESHOLD".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            max_search_results,
            match_threshold,
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

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_search_results: 5,
            match_threshold: 30,
            log_level: "warn".to_string(),
        }
    }
}
