//! Widget state machines and shared types for the fourfold application.
//!
//! Each widget is an explicit state struct whose methods are the user
//! actions. Nothing in this crate renders or reads a clock: delayed effects
//! are driven by the host passing `now` to `tick`, which keeps every state
//! machine deterministic under test.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`form`]: Contact form fields, validation and submissions
//! - [`articles`]: Article records and the re-sortable article table
//! - [`omitter`]: Debounced stop-word filtering
//! - [`slideshow`]: Slide navigation with a transition lock
//! - [`timer`]: Owned, cancellable timer slots
//! - [`message`]: TUI event messages and panels
//! - [`error`]: Error types for widget construction
//!
//! # Examples
//!
//! ```
//! use std::time::{Duration, Instant};
//! use fourfold_protocol::{Slideshow, slideshow::sample_slides};
//!
//! let start = Instant::now();
//! let mut show = Slideshow::new(sample_slides()).unwrap();
//!
//! show.next(start);
//! show.tick(start + Duration::from_millis(250));
//! assert_eq!(show.current_index(), 1);
//! assert_eq!(show.progress_percent(), 25);
//! ```

pub mod articles;
pub mod error;
pub mod form;
pub mod message;
pub mod omitter;
pub mod slideshow;
pub mod timer;

// Re-export primary types at crate root for convenience
pub use articles::{Article, ArticleTable, SortKey};
pub use error::{ProtocolError, Result};
pub use form::{ContactForm, FormData, FormError, FormField, Submission};
pub use message::{Message, Panel};
pub use omitter::{FilterMode, StopWords, WordOmitter};
pub use slideshow::{NavState, Slide, Slideshow};
pub use timer::{Delays, Timer};
