//! Per-widget configuration sections.
//!
//! Each section carries the delays of its widget and the caller-supplied
//! data the widget is built from. Missing keys fall back to the values of
//! the built-in sample widgets.
//!
//! # Delays
//!
//! | Widget | Main delay | Settle delay |
//! |--------|------------|--------------|
//! | Word omitter | 150 ms debounce | 50 ms |
//! | Slideshow | 200 ms swap | 50 ms |

use fourfold_protocol::{Article, Delays, Slide, StopWords, articles, omitter, slideshow};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Maximum allowed delay (10 seconds).
pub const MAX_DELAY_MS: u64 = 10_000;

/// Stop words used when none are configured.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "and", "or", "but",
];

/// Checks that a delay is non-zero and at most [`MAX_DELAY_MS`].
fn validate_delay(name: &'static str, value_ms: u64) -> Result<()> {
    if value_ms == 0 {
        return Err(ConfigError::InvalidDelay {
            name,
            reason: "must be greater than zero".to_string(),
        });
    }
    if value_ms > MAX_DELAY_MS {
        return Err(ConfigError::InvalidDelay {
            name,
            reason: format!("{value_ms} ms exceeds maximum of {MAX_DELAY_MS} ms"),
        });
    }
    Ok(())
}

/// Configuration of the word omitter.
///
/// # Examples
///
/// ```
/// use fourfold_config::OmitterConfig;
///
/// let config = OmitterConfig::default();
/// assert_eq!(config.debounce_ms, 150);
/// assert!(config.stop_words.iter().any(|w| w == "the"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OmitterConfig {
    /// Quiet time after the last change before the output is recomputed.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Time the output stays in its transitional state after a recompute.
    #[serde(default = "default_omitter_settle_ms")]
    pub settle_ms: u64,

    /// Words to omit, matched case-insensitively.
    #[serde(default = "default_stop_words")]
    pub stop_words: Vec<String>,
}

fn default_debounce_ms() -> u64 {
    omitter::DEFAULT_DELAYS.delay.as_millis() as u64
}

fn default_omitter_settle_ms() -> u64 {
    omitter::DEFAULT_DELAYS.settle.as_millis() as u64
}

fn default_stop_words() -> Vec<String> {
    DEFAULT_STOP_WORDS.iter().map(|w| (*w).to_string()).collect()
}

impl Default for OmitterConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            settle_ms: default_omitter_settle_ms(),
            stop_words: default_stop_words(),
        }
    }
}

impl OmitterConfig {
    /// Returns the configured delays.
    #[must_use]
    pub fn delays(&self) -> Delays {
        Delays::from_millis(self.debounce_ms, self.settle_ms)
    }

    /// Builds the stop-word set.
    #[must_use]
    pub fn stop_words(&self) -> StopWords {
        self.stop_words.iter().cloned().collect()
    }

    /// Validates the delays.
    ///
    /// # Errors
    ///
    /// Returns an error if a delay is zero or too long.
    pub fn validate(&self) -> Result<()> {
        validate_delay("word_omitter.debounce_ms", self.debounce_ms)?;
        validate_delay("word_omitter.settle_ms", self.settle_ms)
    }
}

/// Configuration of the slideshow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideshowConfig {
    /// Time between a navigation command and the slide swap.
    #[serde(default = "default_transition_ms")]
    pub transition_ms: u64,

    /// Time after the swap before new commands are accepted.
    #[serde(default = "default_slideshow_settle_ms")]
    pub settle_ms: u64,

    /// The slides, in presentation order.
    #[serde(default = "slideshow::sample_slides")]
    pub slides: Vec<Slide>,
}

fn default_transition_ms() -> u64 {
    slideshow::DEFAULT_DELAYS.delay.as_millis() as u64
}

fn default_slideshow_settle_ms() -> u64 {
    slideshow::DEFAULT_DELAYS.settle.as_millis() as u64
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            transition_ms: default_transition_ms(),
            settle_ms: default_slideshow_settle_ms(),
            slides: slideshow::sample_slides(),
        }
    }
}

impl SlideshowConfig {
    /// Returns the configured delays.
    #[must_use]
    pub fn delays(&self) -> Delays {
        Delays::from_millis(self.transition_ms, self.settle_ms)
    }

    /// Validates the delays and the slide list.
    ///
    /// # Errors
    ///
    /// Returns an error if a delay is out of range or there are no slides.
    pub fn validate(&self) -> Result<()> {
        validate_delay("slideshow.transition_ms", self.transition_ms)?;
        validate_delay("slideshow.settle_ms", self.settle_ms)?;
        if self.slides.is_empty() {
            return Err(ConfigError::EmptySlides);
        }
        Ok(())
    }
}

/// Returns the articles used when none are configured.
#[must_use]
pub fn default_articles() -> Vec<Article> {
    articles::sample_articles()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_sample_widgets() {
        let omitter = OmitterConfig::default();
        assert_eq!(omitter.delays(), Delays::from_millis(150, 50));
        assert_eq!(omitter.stop_words().len(), DEFAULT_STOP_WORDS.len());

        let slides = SlideshowConfig::default();
        assert_eq!(slides.delays(), Delays::from_millis(200, 50));
        assert_eq!(slides.slides.len(), 8);
    }

    #[test]
    fn zero_delay_is_rejected() {
        let config = OmitterConfig {
            debounce_ms: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidDelay { name: "word_omitter.debounce_ms", .. }
        ));
    }

    #[test]
    fn long_delay_is_rejected() {
        let config = SlideshowConfig {
            settle_ms: MAX_DELAY_MS + 1,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SlideshowConfig {
            settle_ms: MAX_DELAY_MS,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_slides_are_rejected() {
        let config = SlideshowConfig {
            slides: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptySlides)));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config: OmitterConfig = serde_json5::from_str("{ stop_words: ['x'] }").unwrap();
        assert_eq!(config.stop_words, ["x"]);
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.settle_ms, 50);
    }
}
