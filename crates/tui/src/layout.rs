//! Centralized layout measurements for the TUI.
//!
//! This module defines shared constants for layout dimensions used across
//! multiple rendering components.

/// Height of the header bar in rows.
///
/// The header displays the application title and the panel tabs.
pub const HEADER_HEIGHT: u16 = 3;

/// Height of the status bar in rows.
pub const STATUS_BAR_HEIGHT: u16 = 3;

/// Height of a single-line text input, including its border.
pub const INPUT_HEIGHT: u16 = 3;

/// Minimum terminal height for useful rendering (content area).
///
/// Below this height, we display a "terminal too small" message. The
/// contact form needs the most rows: three inputs plus the status line.
pub const MIN_HEIGHT: u16 = 12;

/// Minimum terminal height for rendering with header and status bar.
///
/// When terminal height is between `MIN_HEIGHT` and `MIN_HEIGHT_WITH_CHROME`,
/// we hide both bars to reclaim content space.
pub const MIN_HEIGHT_WITH_CHROME: u16 = MIN_HEIGHT + HEADER_HEIGHT + STATUS_BAR_HEIGHT;

/// Minimum terminal width for useful rendering.
///
/// The article table needs room for its three columns.
pub const MIN_WIDTH: u16 = 50;
