//! Status bar rendering widget.
//!
//! This module provides the footer with the keybinding hints of the active
//! panel.

use fourfold_protocol::Panel;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Returns the `(key, action)` hints specific to a panel.
fn panel_hints(panel: Panel) -> &'static [(&'static str, &'static str)] {
    match panel {
        Panel::ContactForm => &[("↑↓", "Field"), ("Enter", "Submit")],
        Panel::Articles => &[("u", "Most Upvoted"), ("d", "Most Recent")],
        Panel::WordOmitter => &[("Ctrl+T", "Toggle mode"), ("Ctrl+L", "Clear")],
        Panel::Slideshow => &[("←→", "Slide"), ("r", "Restart")],
    }
}

/// Renders the status bar with keybinding hints for `panel`.
///
/// # Layout
///
/// ```text
/// +----------------------------------------------------------------+
/// | ↑↓ Field  Enter Submit  Tab Panel  F1 Help  Ctrl+C Quit        |
/// +----------------------------------------------------------------+
/// ```
///
/// # Examples
///
/// ```
/// use fourfold_protocol::Panel;
/// use fourfold_tui::widgets::render_status_bar;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(Panel::Slideshow, area, &mut buf);
/// ```
pub fn render_status_bar(panel: Panel, area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let global = [("Tab", "Panel"), ("F1", "Help"), ("Ctrl+C", "Quit")];
    let spans: Vec<Span<'static>> = panel_hints(panel)
        .iter()
        .chain(global.iter())
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}  "), text_style),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL))
        .render(area, buf);
}
