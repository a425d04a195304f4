//! Configuration module for outbox.

use serde::Deserialize;
use std::path::Path;

use crate::{OutboxError, Result};

/// Dispatch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DispatchConfig {
    /// Path to the journal file that receives dispatch results.
    #[serde(default = "default_journal_path")]
    pub journal_path: String,
}

fn default_journal_path() -> String {
    "send.log".to_string()
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            journal_path: default_journal_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Dispatch configuration.
    #[serde(default)]
    pub dispatch: DispatchConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(OutboxError::Io)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| OutboxError::Config(format!("config parse error: {e}")))
    }
}
