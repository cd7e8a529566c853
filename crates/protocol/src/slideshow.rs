//! Slideshow navigation with a transition lock.
//!
//! Navigation is two-phase: a command locks the slideshow, the slide index
//! changes once the swap delay has elapsed, and the lock is released after
//! a further settle delay. Commands that arrive while locked are dropped.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProtocolError, Result};
use crate::timer::{Delays, Timer};

/// Default swap and settle delays of the slideshow.
pub const DEFAULT_DELAYS: Delays = Delays::from_millis(200, 50);

/// A single slide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slide {
    /// Slide heading.
    pub title: String,
    /// Slide body.
    pub text: String,
}

impl Slide {
    /// Creates a slide.
    #[must_use]
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Whether the slideshow accepts navigation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavState {
    /// Ready for the next command.
    #[default]
    Idle,
    /// A transition is in flight; commands are dropped.
    Transitioning,
}

/// The pending step of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// Move to the target index.
    Swap { target: usize },
    /// Release the transition lock.
    Unlock,
}

/// The slideshow widget state.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use fourfold_protocol::{Slide, Slideshow};
///
/// let start = Instant::now();
/// let mut show = Slideshow::new(vec![Slide::new("One", "1"), Slide::new("Two", "2")]).unwrap();
///
/// assert!(show.next(start));
/// assert!(!show.next(start));
///
/// show.tick(start + Duration::from_millis(250));
/// assert_eq!(show.current_index(), 1);
/// assert!(show.is_last());
/// assert_eq!(show.progress_percent(), 100);
/// ```
#[derive(Debug, Clone)]
pub struct Slideshow {
    slides: Vec<Slide>,
    current: usize,
    delays: Delays,
    transition: Timer<Step>,
}

impl Slideshow {
    /// Creates a slideshow with the default delays.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptySlideDeck`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        Self::with_delays(slides, DEFAULT_DELAYS)
    }

    /// Creates a slideshow with custom swap and settle delays.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EmptySlideDeck`] if `slides` is empty.
    pub fn with_delays(slides: Vec<Slide>, delays: Delays) -> Result<Self> {
        if slides.is_empty() {
            return Err(ProtocolError::EmptySlideDeck);
        }
        Ok(Self {
            slides,
            current: 0,
            delays,
            transition: Timer::new(),
        })
    }

    /// Returns all slides.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Returns the number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; a slideshow holds at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Returns the index of the visible slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the visible slide.
    #[must_use]
    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Returns the navigation state.
    #[must_use]
    pub fn state(&self) -> NavState {
        if self.transition.is_pending() {
            NavState::Transitioning
        } else {
            NavState::Idle
        }
    }

    /// Returns whether a transition is in flight.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.state() == NavState::Transitioning
    }

    /// Returns whether the first slide is visible.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    /// Returns whether the last slide is visible.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.slides.len()
    }

    /// Returns `(current + 1) / len * 100`, rounded half up.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        progress_percent(self.current, self.slides.len())
    }

    /// Starts moving to the following slide.
    ///
    /// Returns `false` if the command was dropped.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.is_last() {
            return false;
        }
        self.begin(self.current + 1, now)
    }

    /// Starts moving to the preceding slide.
    ///
    /// Returns `false` if the command was dropped.
    pub fn prev(&mut self, now: Instant) -> bool {
        if self.is_first() {
            return false;
        }
        self.begin(self.current - 1, now)
    }

    /// Starts jumping back to the first slide.
    ///
    /// Returns `false` if the command was dropped.
    pub fn restart(&mut self, now: Instant) -> bool {
        if self.is_first() {
            return false;
        }
        self.begin(0, now)
    }

    /// Applies every transition step that is due at `now`.
    ///
    /// Returns `true` if the visible state changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some((due_at, step)) = self.transition.take_due(now) {
            match step {
                Step::Swap { target } => {
                    self.current = target;
                    debug!(index = target, "slide swapped");
                    self.transition
                        .schedule(due_at, self.delays.settle, Step::Unlock);
                }
                Step::Unlock => {}
            }
            changed = true;
        }
        changed
    }

    /// Returns when the next transition step is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.transition.deadline()
    }

    fn begin(&mut self, target: usize, now: Instant) -> bool {
        if self.is_transitioning() {
            debug!(target, "slide command dropped during transition");
            return false;
        }
        self.transition
            .schedule(now, self.delays.delay, Step::Swap { target });
        true
    }
}

/// Returns `(index + 1) / len * 100` rounded half up, or 0 for an empty deck.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::slideshow::progress_percent;
///
/// assert_eq!(progress_percent(0, 8), 13);
/// assert_eq!(progress_percent(2, 3), 100);
/// ```
#[must_use]
pub fn progress_percent(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((index + 1) * 200 + len) / (2 * len)
}

/// Returns the sample slides shown when no data is configured.
#[must_use]
pub fn sample_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Introduction to Deep Learning",
            "Deep learning is a subset of machine learning that uses artificial neural networks to model complex patterns in data. It powers technologies like self-driving cars, voice assistants, and image recognition.",
        ),
        Slide::new(
            "Neural Networks Explained",
            "Neural networks are inspired by the human brain. They consist of layers of interconnected 'neurons' that process input data and learn through training to make predictions or classifications.",
        ),
        Slide::new(
            "Training with Backpropagation",
            "Backpropagation is a key algorithm that adjusts the weights of a neural network by calculating the gradient of the loss function. This helps minimize prediction errors over time.",
        ),
        Slide::new(
            "Deep Architectures",
            "Deep learning models often have many hidden layers, enabling them to learn increasingly abstract features. Examples include CNNs for images and RNNs for sequences.",
        ),
        Slide::new(
            "Convolutional Neural Networks (CNNs)",
            "CNNs are designed for visual tasks. They use convolutional layers to extract spatial features from images and are widely used in medical imaging, facial recognition, and autonomous driving.",
        ),
        Slide::new(
            "Recurrent Neural Networks (RNNs)",
            "RNNs handle sequential data like text or time-series. They retain memory of previous inputs, making them powerful for language modeling and speech recognition.",
        ),
        Slide::new(
            "Challenges & Considerations",
            "Training deep models requires large datasets, high computational power, and careful tuning to avoid overfitting. Techniques like dropout, batch normalization, and transfer learning help mitigate these issues.",
        ),
        Slide::new(
            "Future of Deep Learning",
            "From generative AI to real-time translation and drug discovery, deep learning continues to evolve. With advancements in hardware and algorithms, its future impact is boundless.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use proptest::prelude::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn deck(n: usize) -> Slideshow {
        let slides = (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), "body"))
            .collect();
        Slideshow::new(slides).expect("non-empty deck")
    }

    /// Issues a command and lets its transition finish.
    fn settle(show: &mut Slideshow, at: Instant) -> Instant {
        let done = at + DEFAULT_DELAYS.total();
        show.tick(done);
        done
    }

    #[test]
    fn empty_deck_is_rejected() {
        assert!(matches!(
            Slideshow::new(Vec::new()),
            Err(ProtocolError::EmptySlideDeck)
        ));
    }

    #[test]
    fn starts_idle_on_first_slide() {
        let show = deck(3);
        assert_eq!(show.current_index(), 0);
        assert_eq!(show.state(), NavState::Idle);
        assert!(show.is_first());
        assert!(!show.is_last());
        assert_eq!(show.current_slide().title, "Slide 0");
    }

    #[test]
    fn next_is_two_phase() {
        let start = Instant::now();
        let mut show = deck(3);

        assert!(show.next(start));
        assert!(show.is_transitioning());
        assert_eq!(show.current_index(), 0);

        assert!(!show.tick(start + ms(199)));
        assert!(show.tick(start + ms(200)));
        assert_eq!(show.current_index(), 1);
        assert!(show.is_transitioning());

        assert!(show.tick(start + ms(250)));
        assert_eq!(show.state(), NavState::Idle);
    }

    #[test]
    fn boundaries_are_no_ops() {
        let start = Instant::now();
        let mut show = deck(2);
        assert!(!show.prev(start));
        assert!(!show.restart(start));
        assert!(!show.is_transitioning());

        assert!(show.next(start));
        let at = settle(&mut show, start);
        assert!(show.is_last());
        assert!(!show.next(at));
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn commands_are_dropped_while_transitioning() {
        let start = Instant::now();
        let mut show = deck(4);
        assert!(show.next(start));
        assert!(!show.next(start + ms(10)));
        assert!(!show.prev(start + ms(210)));

        show.tick(start + ms(1000));
        assert_eq!(show.current_index(), 1);
    }

    #[test]
    fn restart_is_dropped_while_transitioning() {
        let start = Instant::now();
        let mut show = deck(4);
        assert!(show.next(start));
        let at = settle(&mut show, start);
        assert_eq!(show.current_index(), 1);

        assert!(show.next(at));
        assert!(!show.restart(at + ms(10)));
        assert!(!show.restart(at + ms(210)));
        let at = settle(&mut show, at);
        assert_eq!(show.current_index(), 2);

        assert!(show.restart(at));
        assert!(!show.restart(at + ms(10)));
        assert!(!show.next(at + ms(10)));
        settle(&mut show, at);
        assert_eq!(show.current_index(), 0);
        assert!(!show.is_transitioning());
    }

    #[test]
    fn prev_and_restart_move_back() {
        let start = Instant::now();
        let mut show = deck(5);
        let mut at = start;
        for _ in 0..3 {
            assert!(show.next(at));
            at = settle(&mut show, at);
        }
        assert_eq!(show.current_index(), 3);

        assert!(show.prev(at));
        at = settle(&mut show, at);
        assert_eq!(show.current_index(), 2);

        assert!(show.restart(at));
        show.tick(at + ms(200));
        assert_eq!(show.current_index(), 0);
    }

    #[test]
    fn late_tick_runs_both_phases() {
        let start = Instant::now();
        let mut show = deck(2);
        show.next(start);
        assert!(show.tick(start + ms(5000)));
        assert_eq!(show.current_index(), 1);
        assert!(!show.is_transitioning());
        assert_eq!(show.next_deadline(), None);
    }

    #[test]
    fn single_slide_is_first_and_last() {
        let start = Instant::now();
        let mut show = deck(1);
        assert!(show.is_first());
        assert!(show.is_last());
        assert_eq!(show.progress_percent(), 100);
        assert!(!show.next(start));
    }

    #[test]
    fn sample_progress_labels() {
        let percents: Vec<usize> = (0..8).map(|i| progress_percent(i, 8)).collect();
        insta::assert_debug_snapshot!(percents, @r"
        [
            13,
            25,
            38,
            50,
            63,
            75,
            88,
            100,
        ]
        ");
    }

    proptest! {
        /// Every reachable index maps to round((i + 1) / N * 100).
        #[test]
        fn progress_matches_float_rounding(len in 1usize..200, steps in 0usize..200) {
            let start = Instant::now();
            let slides = (0..len).map(|i| Slide::new(i.to_string(), "")).collect();
            let mut show = Slideshow::new(slides).expect("non-empty deck");
            let mut at = start;
            for _ in 0..steps.min(len - 1) {
                show.next(at);
                at = settle(&mut show, at);
            }

            let i = show.current_index();
            let expected = ((i + 1) as f64 * 100.0 / len as f64).round() as usize;
            prop_assert_eq!(show.progress_percent(), expected);
        }

        /// The index never leaves [0, N - 1] whatever the command sequence.
        #[test]
        fn index_stays_in_bounds(len in 1usize..6, commands in prop::collection::vec((0u8..3, 0u64..300), 0..40)) {
            let start = Instant::now();
            let slides = (0..len).map(|i| Slide::new(i.to_string(), "")).collect();
            let mut show = Slideshow::new(slides).expect("non-empty deck");
            let mut at = start;
            for (command, gap) in commands {
                at += ms(gap);
                show.tick(at);
                match command {
                    0 => show.next(at),
                    1 => show.prev(at),
                    _ => show.restart(at),
                };
                prop_assert!(show.current_index() < len);
            }
        }
    }
}
