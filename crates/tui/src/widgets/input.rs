//! Single-line text input shared by the contact form and the word omitter.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Cursor glyph appended to the focused input.
const CURSOR: &str = "▏";

/// Renders a bordered text input.
///
/// Empty inputs show `placeholder` in a muted style. The focused input gets
/// a highlighted border and a trailing cursor; when the value is wider than
/// the input only its tail is shown.
pub fn render_text_input(
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .title(Span::styled(
            format!(" {label} "),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    let inner_width = usize::from(block.inner(area).width);
    let mut spans = Vec::with_capacity(2);
    if value.is_empty() {
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(
            placeholder.to_owned(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let budget = inner_width.saturating_sub(usize::from(focused));
        spans.push(Span::raw(visible_tail(value, budget).to_owned()));
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(Color::Yellow)));
        }
    }

    Paragraph::new(Line::from(spans)).block(block).render(area, buf);
}

/// Returns the longest suffix of `value` that fits in `width` columns.
fn visible_tail(value: &str, width: usize) -> &str {
    let count = value.chars().count();
    if count <= width {
        return value;
    }
    let skip = count - width;
    value
        .char_indices()
        .nth(skip)
        .map_or("", |(offset, _)| &value[offset..])
}
