//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the fourfold application.

use std::path::Path;

use fourfold_protocol::Article;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::logging::LoggingConfig;
use crate::persistence::{find_config_file, read_config_file};
use crate::widgets::{OmitterConfig, SlideshowConfig, default_articles};

/// The main configuration struct for the fourfold application.
///
/// Every section is optional in the file; anything left out falls back to
/// the built-in sample data and delays.
///
/// # Examples
///
/// ```
/// use fourfold_config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.articles.len(), 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Word omitter delays and stop words.
    #[serde(default)]
    pub word_omitter: OmitterConfig,

    /// Slideshow delays and slides.
    #[serde(default)]
    pub slideshow: SlideshowConfig,

    /// Articles shown in the article table.
    #[serde(default = "default_articles")]
    pub articles: Vec<Article>,

    /// Logging output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_omitter: OmitterConfig::default(),
            slideshow: SlideshowConfig::default(),
            articles: default_articles(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// Creates the built-in configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./fourfold.json5` or `./fourfold.json`
    /// 2. User: `~/.config/fourfold/config.json5` or `~/.config/fourfold/config.json`
    ///
    /// If no configuration file is found, returns the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fourfold_config::Config;
    ///
    /// # async fn example() -> fourfold_config::Result<()> {
    /// let config = Config::load().await?;
    /// println!("Loaded {} slides", config.slideshow.slides.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn load() -> Result<Self> {
        let path = find_config_file();
        if let Some(path) = &path {
            info!(path = %path.display(), "loading configuration");
        }
        Self::load_or_default(path.as_deref())
    }

    /// Loads configuration from `path`, or the built-in configuration when
    /// there is no file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fourfold_config::Config;
    ///
    /// # fn example() -> fourfold_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a delay is out of range or the slideshow has no
    /// slides.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.slideshow.slides.clear();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.word_omitter.validate()?;
        self.slideshow.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(!config.logging.is_enabled());
    }

    #[test]
    fn new_config() {
        assert_eq!(Config::new(), Config::default());
    }

    #[test]
    fn load_or_default_without_file() {
        assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
    }

    #[test]
    fn load_or_default_reads_given_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fourfold.json5");
        std::fs::write(&path, "{ word_omitter: { debounce_ms: 75 } }").unwrap();

        let config = Config::load_or_default(Some(&path)).unwrap();
        assert_eq!(config.word_omitter.debounce_ms, 75);
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: Config = serde_json5::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn deserialize_partial() {
        let config: Config = serde_json5::from_str(
            r#"{ articles: [{ title: "Only", upvotes: 1, date: "2024-01-01" }] }"#,
        )
        .unwrap();
        assert_eq!(config.articles.len(), 1);
        assert_eq!(config.articles[0].title, "Only");
        assert_eq!(config.slideshow, SlideshowConfig::default());
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"
            {
                word_omitter: { debounce_ms: 300, stop_words: ["of"] },
                slideshow: {
                    transition_ms: 100,
                    slides: [{ title: "Hello", text: "World" }],
                },
                logging: { level: "debug" },
            }
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.word_omitter.debounce_ms, 300);
        assert_eq!(config.word_omitter.settle_ms, 50);
        assert_eq!(config.word_omitter.stop_words, ["of"]);
        assert_eq!(config.slideshow.transition_ms, 100);
        assert_eq!(config.slideshow.slides[0].title, "Hello");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.articles.len(), 6);
    }

    #[test]
    fn load_rejects_invalid_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(&path, "{ slideshow: { slides: [] } }").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::EmptySlides)
        ));
    }

    #[test]
    fn load_rejects_malformed_dates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json5");
        std::fs::write(
            &path,
            r#"{ articles: [{ title: "Bad", upvotes: 1, date: "March 3rd" }] }"#,
        )
        .unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(ConfigError::ParseJson5(_))
        ));
    }
}
