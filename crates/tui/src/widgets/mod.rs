//! Widget components for the fourfold TUI.
//!
//! Each panel is drawn by a pure function that renders widget state into a
//! buffer, which keeps rendering easy to test and compose.
//!
//! # Modules
//!
//! - [`header`]: Application title and panel tabs
//! - [`contact_form`]: Form inputs and submission result
//! - [`article_table`]: Sort controls and article table
//! - [`word_omitter`]: Input, statistics, filtered output and stop words
//! - [`slideshow`]: Progress, dots, current slide and navigation hints
//! - [`status_bar`]: Footer with keybinding hints
//! - [`help`]: Keybinding overlay
//! - [`input`]: Text input shared by the form and the omitter
//!
//! # Example
//!
//! ```
//! use fourfold_protocol::{ArticleTable, articles::sample_articles};
//! use fourfold_tui::widgets;
//! use ratatui::buffer::Buffer;
//! use ratatui::layout::Rect;
//!
//! let table = ArticleTable::new(sample_articles());
//! let area = Rect::new(0, 0, 80, 12);
//! let mut buf = Buffer::empty(area);
//!
//! widgets::render_article_table(&table, area, &mut buf);
//! ```

pub mod article_table;
pub mod contact_form;
pub mod header;
pub mod help;
pub mod input;
pub mod slideshow;
pub mod status_bar;
pub mod word_omitter;

// Re-export primary rendering functions for convenience
pub use article_table::render_article_table;
pub use contact_form::render_contact_form;
pub use header::render_header;
pub use help::render_help_overlay;
pub use input::render_text_input;
pub use slideshow::render_slideshow;
pub use status_bar::render_status_bar;
pub use word_omitter::render_word_omitter;
