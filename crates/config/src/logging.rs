//! Logging configuration.
//!
//! The terminal UI owns stdout and stderr while it runs, so log output is
//! only produced when a log file is configured.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV_VAR: &str = "FOURFOLD_LOG";

/// Default log filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where and how verbosely to log.
///
/// # Examples
///
/// ```
/// use fourfold_config::LoggingConfig;
///
/// let config = LoggingConfig::default();
/// assert!(config.file.is_none());
/// assert_eq!(config.level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// File to append log lines to. Logging is disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Filter directive (e.g. `"debug"` or `"fourfold_protocol=trace"`),
    /// used when [`LOG_ENV_VAR`] is not set.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    /// Returns whether log output is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.file.is_some()
    }
}
