//! Configuration management for the fourfold application.
//!
//! This crate handles loading and validating the configuration that feeds
//! the four widgets: their delays and the caller-supplied data (stop words,
//! articles and slides), plus logging output.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`widgets`]: Word omitter and slideshow sections
//! - [`logging`]: Log file and filter settings
//! - [`persistence`]: Config file discovery and reading
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! 1. Local config (`./fourfold.json5` or `./fourfold.json`)
//! 2. User config (`~/.config/fourfold/config.json5` or `~/.config/fourfold/config.json`)
//! 3. Built-in defaults
//!
//! # Example File
//!
//! ```json5
//! {
//!   word_omitter: { debounce_ms: 150, settle_ms: 50, stop_words: ["a", "the"] },
//!   slideshow: {
//!     transition_ms: 200,
//!     settle_ms: 50,
//!     slides: [{ title: "Welcome", text: "First slide" }],
//!   },
//!   articles: [{ title: "Hello", upvotes: 12, date: "2024-03-15" }],
//!   logging: { file: "fourfold.log", level: "debug" },
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod persistence;
pub mod widgets;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use logging::LoggingConfig;
pub use widgets::{OmitterConfig, SlideshowConfig};
