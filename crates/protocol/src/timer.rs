//! Owned, cancellable timer slots.
//!
//! Widgets never register callbacks with a global scheduler. Instead each
//! widget owns one [`Timer`] per kind of delayed effect and the host calls
//! the widget's `tick(now)` method; the widget then asks its timers which
//! payloads are due. Scheduling a new payload replaces the pending one, so a
//! superseded effect can never fire.

use std::time::{Duration, Instant};

/// A pair of delays used by two-phase effects.
///
/// `delay` is the time before the main effect applies (debounce or slide
/// swap); `settle` is the extra time before the widget leaves its
/// transitional state.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use fourfold_protocol::Delays;
///
/// let delays = Delays::from_millis(150, 50);
/// assert_eq!(delays.delay, Duration::from_millis(150));
/// assert_eq!(delays.total(), Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    /// Time before the main effect applies.
    pub delay: Duration,
    /// Time after the main effect before the transitional state ends.
    pub settle: Duration,
}

impl Delays {
    /// Creates delays from millisecond values.
    #[must_use]
    pub const fn from_millis(delay_ms: u64, settle_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            settle: Duration::from_millis(settle_ms),
        }
    }

    /// Returns the full length of a two-phase effect.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay + self.settle
    }
}

/// A pending deadline and its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending<T> {
    deadline: Instant,
    payload: T,
}

/// A single-slot timer.
///
/// Holds at most one pending payload. [`schedule`](Self::schedule) cancels
/// whatever was pending before.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
/// use fourfold_protocol::Timer;
///
/// let start = Instant::now();
/// let mut timer = Timer::new();
/// timer.schedule(start, Duration::from_millis(10), "first");
/// timer.schedule(start, Duration::from_millis(20), "second");
///
/// assert_eq!(timer.take_due(start + Duration::from_millis(15)), None);
/// assert_eq!(
///     timer.take_due(start + Duration::from_millis(20)),
///     Some((start + Duration::from_millis(20), "second"))
/// );
/// assert!(!timer.is_pending());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer<T> {
    pending: Option<Pending<T>>,
}

impl<T> Default for Timer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> Timer<T> {
    /// Creates an idle timer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `payload` to become due `delay` after `now`.
    ///
    /// Any previously pending payload is dropped.
    pub fn schedule(&mut self, now: Instant, delay: Duration, payload: T) {
        self.pending = Some(Pending {
            deadline: now + delay,
            payload,
        });
    }

    /// Drops the pending payload, if any.
    ///
    /// Returns `true` if something was cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Returns whether a payload is pending.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the deadline of the pending payload.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Removes and returns the pending payload if its deadline has passed.
    ///
    /// The deadline is returned alongside the payload so that follow-up
    /// effects can be scheduled relative to when this one was due rather
    /// than when the host happened to tick.
    pub fn take_due(&mut self, now: Instant) -> Option<(Instant, T)> {
        if !self.pending.as_ref().is_some_and(|p| p.deadline <= now) {
            return None;
        }
        self.pending.take().map(|p| (p.deadline, p.payload))
    }
}

/// Returns the earliest of the given deadlines.
///
/// Used by hosts to decide how long they may block waiting for input.
#[must_use]
pub fn earliest(deadlines: impl IntoIterator<Item = Option<Instant>>) -> Option<Instant> {
    deadlines.into_iter().flatten().min()
}
