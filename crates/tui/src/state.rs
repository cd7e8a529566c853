//! Application state management.
//!
//! This module defines the state shared by the panels of the TUI: which
//! panel is active, the help overlay, and one instance of each widget.

use std::time::Instant;

use fourfold_config::Config;
use fourfold_protocol::{
    ArticleTable, ContactForm, FormField, Panel, Slideshow, WordOmitter, timer::earliest,
};
use tracing::{debug, info};

/// The application state.
///
/// Widgets never talk to each other; this struct only routes input to the
/// one behind the active panel and forwards clock ticks to all of them.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The visible panel.
    pub panel: Panel,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
    /// Contact form widget.
    pub form: ContactForm,
    /// The contact form field receiving typed characters.
    pub form_focus: FormField,
    /// Article sort widget.
    pub articles: ArticleTable,
    /// Word omitter widget.
    pub omitter: WordOmitter,
    /// Slideshow widget.
    pub slideshow: Slideshow,
}

impl AppState {
    /// Creates the application state from already built widgets.
    #[must_use]
    pub fn new(articles: ArticleTable, omitter: WordOmitter, slideshow: Slideshow) -> Self {
        Self {
            panel: Panel::default(),
            help_visible: false,
            form: ContactForm::new(),
            form_focus: FormField::default(),
            articles,
            omitter,
            slideshow,
        }
    }

    /// Builds every widget from the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration has no slides.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_config::Config;
    /// use fourfold_protocol::Panel;
    /// use fourfold_tui::AppState;
    ///
    /// let state = AppState::from_config(&Config::default()).unwrap();
    /// assert_eq!(state.panel, Panel::ContactForm);
    /// assert_eq!(state.articles.len(), 6);
    /// ```
    pub fn from_config(config: &Config) -> fourfold_protocol::Result<Self> {
        let articles = ArticleTable::new(config.articles.clone());
        let omitter = WordOmitter::with_delays(
            config.word_omitter.stop_words(),
            config.word_omitter.delays(),
        );
        let slideshow =
            Slideshow::with_delays(config.slideshow.slides.clone(), config.slideshow.delays())?;
        Ok(Self::new(articles, omitter, slideshow))
    }

    /// Toggles the help overlay visibility.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Dismisses the help overlay if it is visible.
    ///
    /// Returns `true` if help was visible and has been dismissed.
    #[must_use]
    pub fn dismiss_help(&mut self) -> bool {
        if self.help_visible {
            self.help_visible = false;
            true
        } else {
            false
        }
    }

    /// Switches to the given panel.
    pub fn show_panel(&mut self, panel: Panel) {
        if self.panel != panel {
            debug!(?panel, "panel switched");
            self.panel = panel;
        }
    }

    /// Moves focus to the following contact form field.
    pub fn focus_next_field(&mut self) {
        self.form_focus = self.form_focus.next();
    }

    /// Moves focus to the preceding contact form field.
    pub fn focus_prev_field(&mut self) {
        self.form_focus = self.form_focus.prev();
    }

    /// Routes a typed character to the active text widget.
    pub fn input_char(&mut self, ch: char, now: Instant) {
        match self.panel {
            Panel::ContactForm => self.form.push_char(self.form_focus, ch),
            Panel::WordOmitter => self.omitter.push_char(ch, now),
            Panel::Articles | Panel::Slideshow => {}
        }
    }

    /// Routes a backspace to the active text widget.
    pub fn backspace(&mut self, now: Instant) {
        match self.panel {
            Panel::ContactForm => self.form.pop_char(self.form_focus),
            Panel::WordOmitter => self.omitter.pop_char(now),
            Panel::Articles | Panel::Slideshow => {}
        }
    }

    /// Submits the contact form and moves focus back to the first field on
    /// success.
    pub fn submit_form(&mut self) {
        match self.form.submit() {
            Ok(submission) => {
                info!(email = %submission.email, "contact form submitted");
                self.form_focus = FormField::default();
            }
            Err(err) => debug!(%err, "contact form submission rejected"),
        }
    }

    /// Applies every delayed widget effect that is due at `now`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let omitter = self.omitter.tick(now);
        let slideshow = self.slideshow.tick(now);
        omitter || slideshow
    }

    /// Returns when the next delayed widget effect is due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest([self.omitter.next_deadline(), self.slideshow.next_deadline()])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn state() -> AppState {
        AppState::from_config(&Config::default()).expect("default config builds")
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_state_has_correct_defaults() {
        let state = state();
        assert_eq!(state.panel, Panel::ContactForm);
        assert_eq!(state.form_focus, FormField::Name);
        assert!(!state.help_visible);
        assert_eq!(state.slideshow.len(), 8);
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn empty_slides_fail_to_build() {
        let mut config = Config::default();
        config.slideshow.slides.clear();
        assert!(AppState::from_config(&config).is_err());
    }

    #[test]
    fn toggle_help_visibility() {
        let mut state = state();
        state.toggle_help();
        assert!(state.help_visible);
        assert!(state.dismiss_help());
        assert!(!state.dismiss_help());
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let start = Instant::now();
        let mut state = state();
        state.input_char('A', start);
        state.focus_next_field();
        state.input_char('b', start);
        state.input_char('c', start);
        state.backspace(start);

        assert_eq!(state.form.data().name, "A");
        assert_eq!(state.form.data().email, "b");
        assert_eq!(state.omitter.input(), "");
    }

    #[test]
    fn typing_goes_to_word_omitter_when_active() {
        let start = Instant::now();
        let mut state = state();
        state.show_panel(Panel::WordOmitter);
        for ch in "the end".chars() {
            state.input_char(ch, start);
        }

        assert_eq!(state.omitter.input(), "the end");
        assert_eq!(state.form.data().name, "");
        assert_eq!(state.next_deadline(), Some(start + ms(150)));

        assert!(state.tick(start + ms(150)));
        assert_eq!(state.omitter.output(), "end");
    }

    #[test]
    fn typing_is_ignored_on_other_panels() {
        let start = Instant::now();
        let mut state = state();
        state.show_panel(Panel::Articles);
        state.input_char('x', start);
        state.backspace(start);
        assert_eq!(state.form.data().name, "");
        assert_eq!(state.omitter.input(), "");
    }

    #[test]
    fn successful_submit_refocuses_first_field() {
        let start = Instant::now();
        let mut state = state();
        for field in FormField::ALL {
            state.form_focus = field;
            state.input_char('x', start);
        }
        state.submit_form();

        assert_eq!(state.form_focus, FormField::Name);
        assert!(state.form.submission().is_some());
    }

    #[test]
    fn failed_submit_keeps_focus() {
        let mut state = state();
        state.focus_prev_field();
        state.submit_form();

        assert_eq!(state.form_focus, FormField::Message);
        assert!(state.form.error().is_some());
    }

    #[test]
    fn tick_drives_slideshow() {
        let start = Instant::now();
        let mut state = state();
        assert!(state.slideshow.next(start));
        assert_eq!(state.next_deadline(), Some(start + ms(200)));

        state.tick(start + ms(250));
        assert_eq!(state.slideshow.current_index(), 1);
        assert_eq!(state.next_deadline(), None);
    }
}
