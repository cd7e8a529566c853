//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    ///
    /// Malformed article dates surface here as well.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// A widget delay is out of range.
    #[error("invalid delay `{name}`: {reason}")]
    InvalidDelay {
        /// The configuration key of the delay.
        name: &'static str,
        /// The reason the delay is invalid.
        reason: String,
    },

    /// The slideshow has no slides.
    #[error("slideshow.slides must contain at least one slide")]
    EmptySlides,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
