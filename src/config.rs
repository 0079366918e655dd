//! Configuration management for arcade-contacts.
//!
//! Configuration is read from environment variables, with an optional
//! `.env` file loaded first via `dotenvy`.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the JSON collection file.
const DEFAULT_DB_PATH: &str = "contacts.json";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON document file holding the contact collection
    pub db_path: PathBuf,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ARCADE_CONTACTS_DB`: collection file path (default: `contacts.json`)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present, without failing when it is absent.
        let _ = dotenvy::dotenv();

        let db_path = env::var("ARCADE_CONTACTS_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        if db_path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ARCADE_CONTACTS_DB".to_string(),
                reason: "path is empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            db_path: PathBuf::from(db_path),
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            log_level: "error".to_string(),
        }
    }
}
