//! Terminal UI for the fourfold application.
//!
//! This crate provides a Ratatui-based terminal interface hosting the four
//! widgets, one panel each: the contact form, the article table, the word
//! omitter and the slideshow.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`app`]: Main application struct and run loop
//! - [`state`]: Application state management
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`event`]: Event handling and key mappings
//! - [`layout`]: Shared layout measurements
//! - [`widgets`]: Panel rendering
//!
//! # Example
//!
//! ```no_run
//! use fourfold_config::Config;
//! use fourfold_tui::{App, AppState, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let state = AppState::from_config(&Config::default())?;
//!     let mut app = App::new(state);
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod event;
pub mod layout;
pub mod state;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

// Re-export primary types at crate root for convenience
pub use app::App;
pub use state::AppState;
