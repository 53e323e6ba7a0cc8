//! Backoffice Configuration
//!
//! TOML-backed configuration for the dashboard service and its logging.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::errors::{BackofficeError, Result};

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "BACKOFFICE_CONFIG";

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Resolve the default configuration path.
///
/// `$BACKOFFICE_CONFIG` if set, otherwise `./backoffice.toml`.
pub fn default_config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .ok()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("backoffice.toml"))
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackofficeConfig {
    /// Dashboard request handling
    #[serde(default)]
    pub dashboard: DashboardConfig,

    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Dashboard request handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Deadline for the collaborator work of one request, in milliseconds
    pub request_timeout_ms: u64,
}

impl DashboardConfig {
    /// Request deadline as a duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 10_000,
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter, overridden by `RUST_LOG`
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl BackofficeConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| BackofficeError::invalid(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load the file named by `$BACKOFFICE_CONFIG`, or `./backoffice.toml`
    pub fn load_default() -> Result<Self> {
        Self::load(default_config_path())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        // 1ms to 5 minutes
        let timeout = self.dashboard.request_timeout_ms;
        if timeout == 0 || timeout > 300_000 {
            return Err(BackofficeError::invalid(
                "dashboard.request_timeout_ms must be between 1 and 300000",
            ));
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            return Err(BackofficeError::invalid(format!(
                "logging.level must be one of {VALID_LOG_LEVELS:?}, got {:?}",
                self.logging.level
            )));
        }

        Ok(())
    }
}
