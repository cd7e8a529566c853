//! Debounced stop-word filtering.
//!
//! The word omitter turns free-form input into an output text that either
//! drops every stop word or repeats the input verbatim. Output is not
//! recomputed on every keystroke: each change (re)arms a debounce timer and
//! only the last change inside the window produces a computation. A short
//! settle phase follows each computation so the display can show a
//! transitional state.

use std::collections::HashSet;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::timer::{Delays, Timer, earliest};

/// Default debounce and settle delays of the word omitter.
pub const DEFAULT_DELAYS: Delays = Delays::from_millis(150, 50);

/// Whether stop words are dropped from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Drop stop words.
    #[default]
    Omit,
    /// Pass the input through unchanged.
    ShowAll,
}

impl FilterMode {
    /// Returns the other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Omit => Self::ShowAll,
            Self::ShowAll => Self::Omit,
        }
    }

    /// Returns the status label of this mode.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Omit => "Filtering",
            Self::ShowAll => "Show All",
        }
    }
}

/// Lowercases a token and strips every non-word character.
///
/// Word characters are ASCII letters, ASCII digits and `_`. Lowercasing
/// uses full Unicode rules before stripping, so characters such as the
/// Kelvin sign that lowercase to ASCII letters survive.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::omitter::clean_token;
///
/// assert_eq!(clean_token("The,"), "the");
/// assert_eq!(clean_token("(a)"), "a");
/// assert_eq!(clean_token("don't"), "dont");
/// ```
#[must_use]
pub fn clean_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// A case-insensitive set of words to omit.
///
/// Keeps the words in the order they were supplied for display, while
/// membership checks go through a normalized hash set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: Vec<String>,
    normalized: HashSet<String>,
}

impl StopWords {
    /// Returns the words in their supplied order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns whether `token` is a stop word once cleaned.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        let cleaned = clean_token(token);
        !cleaned.is_empty() && self.normalized.contains(&cleaned)
    }

    /// Returns the number of distinct normalized stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.normalized.len()
    }

    /// Returns whether there are no stop words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stop_words = Self::default();
        for word in iter {
            let word = word.into();
            let cleaned = clean_token(&word);
            if cleaned.is_empty() {
                continue;
            }
            stop_words.normalized.insert(cleaned);
            stop_words.words.push(word);
        }
        stop_words
    }
}

/// Computes the output text for `input` under `mode`.
///
/// In [`FilterMode::Omit`] the input is split on single spaces, tokens that
/// are stop words are dropped and the survivors are joined with single
/// spaces. In [`FilterMode::ShowAll`] the input is returned as is.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{FilterMode, StopWords};
/// use fourfold_protocol::omitter::filter_text;
///
/// let stop_words: StopWords = ["a", "the"].into_iter().collect();
/// assert_eq!(
///     filter_text("the cat sat on a mat", FilterMode::Omit, &stop_words),
///     "cat sat on mat"
/// );
/// ```
#[must_use]
pub fn filter_text(input: &str, mode: FilterMode, stop_words: &StopWords) -> String {
    match mode {
        FilterMode::ShowAll => input.to_owned(),
        FilterMode::Omit => input
            .split(' ')
            .filter(|token| !stop_words.contains(token))
            .collect::<Vec<_>>()
            .join(" "),
    }
}

/// Delayed effects of the word omitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Recompute;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Settle;

/// The word omitter widget state.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use fourfold_protocol::{StopWords, WordOmitter};
///
/// let start = Instant::now();
/// let mut omitter = WordOmitter::new(["a", "the"].into_iter().collect::<StopWords>());
///
/// omitter.set_input("the cat", start);
/// assert_eq!(omitter.output(), "");
/// assert!(omitter.is_settling());
///
/// omitter.tick(start + Duration::from_millis(150));
/// assert_eq!(omitter.output(), "cat");
///
/// omitter.tick(start + Duration::from_millis(200));
/// assert!(!omitter.is_settling());
/// ```
#[derive(Debug, Clone)]
pub struct WordOmitter {
    input: String,
    mode: FilterMode,
    output: String,
    settling: bool,
    stop_words: StopWords,
    delays: Delays,
    recompute: Timer<Recompute>,
    settle: Timer<Settle>,
}

impl WordOmitter {
    /// Creates an omitter with the default delays.
    #[must_use]
    pub fn new(stop_words: StopWords) -> Self {
        Self::with_delays(stop_words, DEFAULT_DELAYS)
    }

    /// Creates an omitter with custom debounce and settle delays.
    #[must_use]
    pub fn with_delays(stop_words: StopWords, delays: Delays) -> Self {
        Self {
            input: String::new(),
            mode: FilterMode::default(),
            output: String::new(),
            settling: false,
            stop_words,
            delays,
            recompute: Timer::new(),
            settle: Timer::new(),
        }
    }

    /// Returns the current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Returns the last computed output text.
    ///
    /// May lag behind [`input`](Self::input) while a computation is pending.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Returns the filtering mode.
    #[must_use]
    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    /// Returns whether the output is in its transitional state.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.settling
    }

    /// Returns the stop words.
    #[must_use]
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Returns the configured delays.
    #[must_use]
    pub fn delays(&self) -> Delays {
        self.delays
    }

    /// Replaces the input text.
    pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
        self.input = text.into();
        self.inputs_changed(now);
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, ch: char, now: Instant) {
        let mut text = self.input.clone();
        text.push(ch);
        self.set_input(text, now);
    }

    /// Removes the last character, if any.
    pub fn pop_char(&mut self, now: Instant) {
        let mut text = self.input.clone();
        if text.pop().is_some() {
            self.set_input(text, now);
        }
    }

    /// Flips between omitting stop words and showing everything.
    pub fn toggle_mode(&mut self, now: Instant) {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "word omitter mode toggled");
        self.inputs_changed(now);
    }

    /// Replaces the stop words.
    pub fn set_stop_words(&mut self, stop_words: StopWords, now: Instant) {
        self.stop_words = stop_words;
        self.inputs_changed(now);
    }

    /// Empties input and output immediately, bypassing the debounce.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
        self.cancel_pending();
    }

    /// Applies every delayed effect that is due at `now`.
    ///
    /// Returns `true` if the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;

        if let Some((due_at, Recompute)) = self.recompute.take_due(now) {
            self.output = filter_text(&self.input, self.mode, &self.stop_words);
            debug!(output_len = self.output.len(), "word omitter output recomputed");
            self.settle.schedule(due_at, self.delays.settle, Settle);
            changed = true;
        }

        if let Some((_, Settle)) = self.settle.take_due(now) {
            self.settling = false;
            changed = true;
        }

        changed
    }

    /// Returns when the next delayed effect is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest([self.recompute.deadline(), self.settle.deadline()])
    }

    /// Counts whitespace-separated words in the input.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.input.split_whitespace().count()
    }

    /// Counts input tokens that omit mode would drop.
    #[must_use]
    pub fn omitted_words(&self) -> usize {
        self.input
            .split(' ')
            .filter(|token| self.stop_words.contains(token))
            .count()
    }

    /// Counts characters in the input.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn inputs_changed(&mut self, now: Instant) {
        if self.input.trim().is_empty() {
            self.output.clear();
            self.cancel_pending();
            return;
        }

        self.settling = true;
        self.settle.cancel();
        self.recompute.schedule(now, self.delays.delay, Recompute);
    }

    fn cancel_pending(&mut self) {
        self.recompute.cancel();
        self.settle.cancel();
        self.settling = false;
    }
}
