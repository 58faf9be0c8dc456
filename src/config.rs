//! Configuration management for the phonebook.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file is read first if present; real environment variables win.

use crate::error::{ConfigError, ConfigResult};
use crate::services::SavePolicy;
use std::env;
use std::path::PathBuf;

/// Default data file, relative to the working directory.
pub const DEFAULT_PHONEBOOK_PATH: &str = "phonebook.json";

/// Configuration for the phonebook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON data file (default: "phonebook.json")
    pub phonebook_path: PathBuf,

    /// When the directory is written back (default: on exit only)
    pub save_policy: SavePolicy,

    /// Log filter used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_PATH`: data file path (default: "phonebook.json")
    /// - `PHONEBOOK_SAVE_ON_CHANGE`: `true`/`false`/`1`/`0`, save after
    ///   every change (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        Self::from_current_env()
    }

    /// Same as [`Config::from_env`] without reading `.env`.
    pub fn from_current_env() -> ConfigResult<Self> {
        let phonebook_path = match env::var("PHONEBOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONEBOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_PHONEBOOK_PATH),
        };

        let save_policy = if Self::parse_env_bool("PHONEBOOK_SAVE_ON_CHANGE", false)? {
            SavePolicy::OnChange
        } else {
            SavePolicy::OnExit
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            phonebook_path,
            save_policy,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
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
            phonebook_path: PathBuf::from(DEFAULT_PHONEBOOK_PATH),
            save_policy: SavePolicy::OnExit,
            log_level: "warn".to_string(),
        }
    }
}
