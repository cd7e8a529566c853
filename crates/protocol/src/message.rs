//! TUI message types for event handling.
//!
//! This module defines the message enum used for communication between
//! the TUI input handler and the widget states.

use serde::{Deserialize, Serialize};

/// The four widget panels of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    /// The contact form.
    #[default]
    ContactForm,
    /// The sortable article table.
    Articles,
    /// The word omitter.
    WordOmitter,
    /// The slideshow.
    Slideshow,
}

impl Panel {
    /// All panels in tab order.
    pub const ALL: [Panel; 4] = [
        Panel::ContactForm,
        Panel::Articles,
        Panel::WordOmitter,
        Panel::Slideshow,
    ];

    /// Returns the tab title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::ContactForm => "Contact Form",
            Self::Articles => "Article Sorting",
            Self::WordOmitter => "Word Omitter",
            Self::Slideshow => "Slideshow",
        }
    }

    /// Returns the position of this panel in [`Panel::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::ContactForm => 0,
            Self::Articles => 1,
            Self::WordOmitter => 2,
            Self::Slideshow => 3,
        }
    }

    /// Returns the following panel, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the preceding panel, wrapping around.
    #[must_use]
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Returns whether the panel captures typed characters.
    #[must_use]
    pub fn accepts_text(self) -> bool {
        matches!(self, Self::ContactForm | Self::WordOmitter)
    }
}

/// Messages that represent user actions in the TUI.
///
/// These messages are produced by the input handler and consumed by
/// the application to update widget state.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::Message;
///
/// let msg = Message::NextSlide;
/// assert!(msg.is_navigation());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Message {
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,
    /// Close the help overlay.
    Escape,
    /// Switch to the next panel.
    NextPanel,
    /// Switch to the previous panel.
    PrevPanel,

    // --- Text input (contact form and word omitter) ---
    /// Type a character into the focused text.
    Input {
        /// The character that was typed.
        ch: char,
    },
    /// Delete the last character of the focused text.
    Backspace,

    // --- Contact form ---
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Submit the contact form.
    Submit,

    // --- Articles ---
    /// Sort articles by upvotes.
    SortByUpvotes,
    /// Sort articles by date.
    SortByDate,

    // --- Word omitter ---
    /// Toggle between omitting stop words and showing everything.
    ToggleFilterMode,
    /// Clear the word omitter input and output.
    ClearText,

    // --- Slideshow ---
    /// Move to the next slide.
    NextSlide,
    /// Move to the previous slide.
    PrevSlide,
    /// Jump back to the first slide.
    RestartSlides,
}

impl Message {
    /// Returns `true` if this message moves focus or position.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_protocol::Message;
    ///
    /// assert!(Message::NextPanel.is_navigation());
    /// assert!(!Message::Submit.is_navigation());
    /// ```
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::NextPanel
                | Self::PrevPanel
                | Self::NextField
                | Self::PrevField
                | Self::NextSlide
                | Self::PrevSlide
                | Self::RestartSlides
        )
    }

    /// Returns `true` if this message should terminate the application.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_protocol::Message;
    ///
    /// assert!(Message::Quit.is_terminating());
    /// assert!(!Message::Escape.is_terminating());
    /// ```
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }

    /// Returns `true` if this message edits text.
    #[must_use]
    pub fn is_text_edit(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Backspace | Self::ClearText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_cycle_wraps() {
        assert_eq!(Panel::Slideshow.next(), Panel::ContactForm);
        assert_eq!(Panel::ContactForm.prev(), Panel::Slideshow);
        for panel in Panel::ALL {
            assert_eq!(Panel::ALL[panel.index()], panel);
            assert_eq!(panel.next().prev(), panel);
        }
    }

    #[test]
    fn only_text_panels_accept_text() {
        assert!(Panel::ContactForm.accepts_text());
        assert!(Panel::WordOmitter.accepts_text());
        assert!(!Panel::Articles.accepts_text());
        assert!(!Panel::Slideshow.accepts_text());
    }

    #[test]
    fn message_classification() {
        assert!(Message::PrevSlide.is_navigation());
        assert!(Message::NextField.is_navigation());
        assert!(!Message::SortByDate.is_navigation());
        assert!(Message::Input { ch: 'x' }.is_text_edit());
        assert!(Message::ClearText.is_text_edit());
        assert!(!Message::Submit.is_text_edit());
    }

    #[test]
    fn message_json_format() {
        let json = serde_json::to_string(&Message::ToggleFilterMode).expect("serialize");
        assert_eq!(json, r#""toggle_filter_mode""#);

        let json = serde_json::to_string(&Message::Input { ch: 'x' }).expect("serialize");
        assert_eq!(json, r#"{"input":{"ch":"x"}}"#);
    }
}
