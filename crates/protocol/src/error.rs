//! Error types for widget construction.
//!
//! Widget operations themselves are total; these errors only occur at the
//! boundary where caller-supplied data is turned into widget state.

/// Errors that can occur when building widget state from caller data.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// A slideshow needs at least one slide.
    #[error("a slideshow requires at least one slide")]
    EmptySlideDeck,

    /// An article date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid article date {value:?}: {source}")]
    InvalidDate {
        /// The rejected date string.
        value: String,
        /// The underlying parse error.
        #[source]
        source: chrono::ParseError,
    },
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
