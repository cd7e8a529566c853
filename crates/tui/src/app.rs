//! Main application struct and run loop.
//!
//! This module provides the `App` struct which orchestrates the TUI
//! application lifecycle including event handling, state updates, timer
//! ticks and rendering.

use std::time::Instant;

use fourfold_protocol::{Message, Panel};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::{Paragraph, Wrap},
};
use tracing::{debug, info, trace};

use crate::{
    AppState,
    event::{event_to_message, poll_event, poll_timeout},
    layout::{HEADER_HEIGHT, MIN_HEIGHT, MIN_HEIGHT_WITH_CHROME, MIN_WIDTH, STATUS_BAR_HEIGHT},
    terminal::AppTerminal,
    widgets::{
        render_article_table, render_contact_form, render_header, render_help_overlay,
        render_slideshow, render_status_bar, render_word_omitter,
    },
};

/// The main application struct.
///
/// Manages the application state and provides the main event loop.
#[derive(Debug)]
pub struct App {
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new application around the given state.
    ///
    /// # Examples
    ///
    /// ```
    /// use fourfold_config::Config;
    /// use fourfold_tui::{App, AppState};
    ///
    /// let state = AppState::from_config(&Config::default()).unwrap();
    /// let app = App::new(state);
    /// assert!(!app.should_quit());
    /// ```
    #[must_use]
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            should_quit: false,
        }
    }

    /// Returns a reference to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Returns whether the run loop will stop after the current iteration.
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Updates the application state based on a message received at `now`.
    ///
    /// When the help overlay is visible, most messages are intercepted to
    /// dismiss the help instead of their normal action. Only `Quit` and
    /// `ToggleHelp` work normally when help is shown.
    pub fn update(&mut self, msg: Message, now: Instant) {
        trace!(?msg, navigation = msg.is_navigation(), "update");

        if msg.is_terminating() {
            info!("quit requested");
            self.should_quit = true;
            return;
        }

        // When help is visible, most keys should dismiss it
        if self.state.help_visible {
            match msg {
                Message::ToggleHelp | Message::Escape => {
                    self.state.toggle_help();
                }
                _ => {
                    let _ = self.state.dismiss_help();
                }
            }
            return;
        }

        if msg.is_text_edit() && !self.state.panel.accepts_text() {
            debug!(?msg, panel = ?self.state.panel, "text edit ignored");
            return;
        }

        match msg {
            Message::ToggleHelp => self.state.toggle_help(),
            Message::NextPanel => self.state.show_panel(self.state.panel.next()),
            Message::PrevPanel => self.state.show_panel(self.state.panel.prev()),
            Message::Input { ch } => self.state.input_char(ch, now),
            Message::Backspace => self.state.backspace(now),
            Message::NextField => self.state.focus_next_field(),
            Message::PrevField => self.state.focus_prev_field(),
            Message::Submit => self.state.submit_form(),
            Message::SortByUpvotes => self.state.articles.sort_by_upvotes(),
            Message::SortByDate => self.state.articles.sort_by_date(),
            Message::ToggleFilterMode => self.state.omitter.toggle_mode(now),
            Message::ClearText => self.state.omitter.clear(),
            Message::NextSlide => {
                let _ = self.state.slideshow.next(now);
            }
            Message::PrevSlide => {
                let _ = self.state.slideshow.prev(now);
            }
            Message::RestartSlides => {
                let _ = self.state.slideshow.restart(now);
            }
            // Escape only closes the help overlay, handled above
            Message::Escape | Message::Quit => {}
        }
    }

    /// Applies every delayed widget effect that is due at `now`.
    ///
    /// Returns `true` if anything visible changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.state.tick(now)
    }

    /// Renders the application UI to the given frame.
    ///
    /// Implements graceful degradation for small terminal sizes:
    /// - Below minimum dimensions, shows a "terminal too small" message.
    /// - Below `MIN_HEIGHT_WITH_CHROME`, hides the header and status bar.
    /// - Otherwise, renders the header, the active panel and the status bar.
    pub fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        if area.height < MIN_HEIGHT || area.width < MIN_WIDTH {
            self.render_terminal_too_small(frame, area);
            return;
        }

        let show_chrome = area.height >= MIN_HEIGHT_WITH_CHROME;

        let content_area = if show_chrome {
            let [header_area, content_area, status_area] = Layout::vertical([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);

            let buf = frame.buffer_mut();
            render_header(self.state.panel, header_area, buf);
            render_status_bar(self.state.panel, status_area, buf);
            content_area
        } else {
            area
        };

        self.render_panel(frame, content_area);

        if self.state.help_visible {
            render_help_overlay(area, frame.buffer_mut());
        }
    }

    /// Renders the active panel.
    fn render_panel(&self, frame: &mut Frame, area: Rect) {
        let buf = frame.buffer_mut();
        match self.state.panel {
            Panel::ContactForm => {
                render_contact_form(&self.state.form, self.state.form_focus, area, buf);
            }
            Panel::Articles => render_article_table(&self.state.articles, area, buf),
            Panel::WordOmitter => render_word_omitter(&self.state.omitter, area, buf),
            Panel::Slideshow => render_slideshow(&self.state.slideshow, area, buf),
        }
    }

    /// Renders a message indicating the terminal is too small.
    fn render_terminal_too_small(&self, frame: &mut Frame, area: Rect) {
        let message = format!(
            "Terminal too small ({}×{})\nMinimum: {}×{} (w×h)",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );

        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });

        // Center the message vertically
        let vertical_offset = area.height.saturating_sub(2) / 2;
        let centered_area = Rect {
            x: area.x,
            y: area.y + vertical_offset,
            width: area.width,
            height: area.height.saturating_sub(vertical_offset),
        };

        frame.render_widget(paragraph, centered_area);
    }

    /// Runs the main application loop.
    ///
    /// This function blocks until the user quits the application. Each
    /// iteration renders, waits for input no longer than the earliest
    /// pending widget deadline, dispatches the input and then ticks the
    /// widgets.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal operations fail.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use fourfold_config::Config;
    /// use fourfold_tui::{App, AppState, terminal};
    ///
    /// #[tokio::main]
    /// async fn main() -> anyhow::Result<()> {
    ///     let mut terminal = terminal::setup_terminal()?;
    ///     let mut app = App::new(AppState::from_config(&Config::default())?);
    ///     app.run(&mut terminal).await?;
    ///     terminal::restore_terminal(&mut terminal)?;
    ///     Ok(())
    /// }
    /// ```
    pub async fn run(&mut self, terminal: &mut AppTerminal) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| self.view(frame))?;

            let timeout = poll_timeout(Instant::now(), self.state.next_deadline());
            if let Some(event) = poll_event(timeout)?
                && let Some(msg) = event_to_message(&event, self.state.panel)
            {
                self.update(msg, Instant::now());
            }

            self.tick(Instant::now());

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }
}
