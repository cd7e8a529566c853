//! Event handling and key mappings.
//!
//! This module provides event polling and conversion from terminal events
//! to application messages. Most keys mean different things depending on
//! which panel is visible, so the mapping takes the active [`Panel`].

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fourfold_protocol::{Message, Panel};

/// Default poll timeout for events.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Polls for a terminal event, waiting at most `timeout`.
///
/// Returns `Some(Event)` if an event is available within the timeout,
/// or `None` if the timeout expires without an event.
///
/// # Errors
///
/// Returns an error if polling the terminal fails.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Returns how long the run loop may wait for input before a widget
/// deadline is due.
///
/// Never exceeds [`POLL_TIMEOUT`]; a deadline in the past yields zero.
#[must_use]
pub fn poll_timeout(now: Instant, deadline: Option<Instant>) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(POLL_TIMEOUT),
        None => POLL_TIMEOUT,
    }
}

/// Converts a terminal event to an application message.
///
/// Returns `Some(Message)` if the event maps to an action,
/// or `None` if the event is not handled.
#[must_use]
pub fn event_to_message(event: &Event, panel: Panel) -> Option<Message> {
    match event {
        Event::Key(key) => key_to_message(*key, panel),
        _ => None,
    }
}

/// Converts a terminal key event to an application message.
///
/// Only key presses are mapped; repeats and releases reported by some
/// terminals are ignored.
///
/// # Key Bindings
///
/// | Key | Panel | Action |
/// |-----|-------|--------|
/// | `Ctrl+C` | any | Quit |
/// | `Tab` / `Shift+Tab` | any | Next / previous panel |
/// | `F1` | any | Toggle help |
/// | `Esc` | any | Close help |
/// | `Up` / `Down` | contact form | Previous / next field |
/// | `Enter` | contact form | Submit |
/// | chars, `Backspace` | contact form, word omitter | Edit text |
/// | `Ctrl+T` | word omitter | Toggle filter mode |
/// | `Ctrl+L` | word omitter | Clear |
/// | `u` / `d` | articles | Sort by upvotes / date |
/// | `Left` / `Right` | slideshow | Previous / next slide |
/// | `r` | slideshow | Restart |
#[must_use]
pub fn key_to_message(key: KeyEvent, panel: Panel) -> Option<Message> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match (key.code, panel) {
            (KeyCode::Char('c'), _) => Some(Message::Quit),
            (KeyCode::Char('t'), Panel::WordOmitter) => Some(Message::ToggleFilterMode),
            (KeyCode::Char('l'), Panel::WordOmitter) => Some(Message::ClearText),
            _ => None,
        };
    }

    // Keys shared by every panel
    match key.code {
        KeyCode::Tab => return Some(Message::NextPanel),
        KeyCode::BackTab => return Some(Message::PrevPanel),
        KeyCode::F(1) => return Some(Message::ToggleHelp),
        KeyCode::Esc => return Some(Message::Escape),
        _ => {}
    }

    match panel {
        Panel::ContactForm => match key.code {
            KeyCode::Up => Some(Message::PrevField),
            KeyCode::Down => Some(Message::NextField),
            KeyCode::Enter => Some(Message::Submit),
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Char(ch) => Some(Message::Input { ch }),
            _ => None,
        },
        Panel::Articles => match key.code {
            KeyCode::Char('u') => Some(Message::SortByUpvotes),
            KeyCode::Char('d') => Some(Message::SortByDate),
            _ => None,
        },
        Panel::WordOmitter => match key.code {
            KeyCode::Backspace => Some(Message::Backspace),
            KeyCode::Char(ch) => Some(Message::Input { ch }),
            _ => None,
        },
        Panel::Slideshow => match key.code {
            KeyCode::Left => Some(Message::PrevSlide),
            KeyCode::Right => Some(Message::NextSlide),
            KeyCode::Char('r') => Some(Message::RestartSlides),
            _ => None,
        },
    }
}
