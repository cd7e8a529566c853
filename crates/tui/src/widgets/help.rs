//! Help overlay widget.
//!
//! This module provides the help overlay that displays all available keybindings
//! when the user presses `F1`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

/// The width of the help overlay panel.
const HELP_WIDTH: u16 = 40;

/// The height of the help overlay panel.
const HELP_HEIGHT: u16 = 25;

/// Renders a centered help overlay displaying all keybindings.
///
/// The overlay is rendered on top of the existing content, which is cleared
/// behind the popup first.
///
/// # Arguments
///
/// * `area` - The full terminal area (the overlay will be centered within it)
/// * `buf` - The buffer to render into
///
/// # Examples
///
/// ```
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
/// use fourfold_tui::widgets::render_help_overlay;
///
/// let area = Rect::new(0, 0, 80, 30);
/// let mut buf = Buffer::empty(area);
///
/// render_help_overlay(area, &mut buf);
/// ```
pub fn render_help_overlay(area: Rect, buf: &mut Buffer) {
    let popup_area = centered_rect(HELP_WIDTH, HELP_HEIGHT, area);

    Clear.render(popup_area, buf);

    let help_block = Block::default()
        .title(Span::styled(
            " Help ",
            Style::default()
                .fg(Color::LightYellow)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::LightYellow));

    Paragraph::new(build_help_lines())
        .block(help_block)
        .alignment(Alignment::Left)
        .render(popup_area, buf);
}

/// Keybinding sections, as `(heading, [(key, action)])`.
const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Global",
        &[
            ("Tab", "Next panel"),
            ("Shift+Tab", "Previous panel"),
            ("F1", "Toggle help"),
            ("Ctrl+C", "Quit"),
        ],
    ),
    (
        "Contact Form",
        &[
            ("↑ ↓", "Previous / next field"),
            ("Enter", "Submit"),
        ],
    ),
    (
        "Article Sorting",
        &[("u", "Most upvoted"), ("d", "Most recent")],
    ),
    (
        "Word Omitter",
        &[("Ctrl+T", "Toggle filtering"), ("Ctrl+L", "Clear text")],
    ),
    (
        "Slideshow",
        &[
            ("← →", "Previous / next slide"),
            ("r", "Restart"),
        ],
    ),
];

/// Builds the lines of help content.
fn build_help_lines() -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Green);
    let text_style = Style::default().fg(Color::White);
    let hint_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let mut lines = Vec::new();
    for (heading, bindings) in SECTIONS {
        lines.push(Line::from(Span::styled(format!("  {heading}"), header_style)));
        for (key, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<11}"), key_style),
                Span::styled(*action, text_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        hint_style,
    )));
    lines
}

/// Creates a centered rectangle within a given area.
///
/// If the requested dimensions exceed the available area, the rectangle
/// will be clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let popup_width = width.min(area.width);
    let popup_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;

    Rect::new(x, y, popup_width, popup_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;

    #[test]
    fn centered_rect_positions_correctly() {
        let area = Rect::new(0, 0, 80, 24);
        let centered = centered_rect(20, 10, area);

        assert_eq!(centered.x, 30); // (80 - 20) / 2
        assert_eq!(centered.y, 7); // (24 - 10) / 2
        assert_eq!(centered.width, 20);
        assert_eq!(centered.height, 10);
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 40, 12);
        let centered = centered_rect(100, 50, area);

        assert_eq!(centered.width, 40);
        assert_eq!(centered.height, 12);
        assert_eq!(centered.x, 0);
        assert_eq!(centered.y, 0);
    }

    #[test]
    fn help_fits_its_popup() {
        // Two border rows around the content.
        assert_eq!(build_help_lines().len() + 2, usize::from(HELP_HEIGHT));
    }

    #[test]
    fn render_help_overlay_creates_output() {
        let area = Rect::new(0, 0, 80, 30);
        let mut buf = Buffer::empty(area);

        render_help_overlay(area, &mut buf);

        let content = buffer_to_string(&buf);
        assert!(content.contains("Help"));
        assert!(content.contains("Global"));
        assert!(content.contains("Slideshow"));
    }

    #[test]
    fn render_help_overlay_handles_small_area() {
        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);

        // Should not panic with small area
        render_help_overlay(area, &mut buf);
    }

    #[test]
    fn build_help_lines_contains_all_keybindings() {
        let content: String = build_help_lines()
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        for key in [
            "Tab", "Shift+Tab", "F1", "Ctrl+C", "Enter", "Ctrl+T", "Ctrl+L", "←", "→", "↑", "↓",
        ] {
            assert!(content.contains(key), "missing {key}");
        }
    }
}
