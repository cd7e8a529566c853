//! Word omitter panel.
//!
//! The output may lag the input by the debounce delay. While the first
//! computation for a non-empty input is pending the output area shows
//! "Processing...", and it is dimmed while the omitter settles.

use fourfold_protocol::{FilterMode, WordOmitter};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::input::render_text_input;
use crate::layout::INPUT_HEIGHT;

/// Placeholder shown in the input while it is empty.
const INPUT_PLACEHOLDER: &str = "Type or paste your text here";

/// Placeholder shown in the output while the input is empty.
const OUTPUT_PLACEHOLDER: &str = "Filtered text will appear here";

/// Renders the omitter input, statistics, output and stop-word list.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::WordOmitter;
/// use fourfold_tui::widgets::render_word_omitter;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let omitter = WordOmitter::new(["the", "a"].into_iter().collect());
/// let area = Rect::new(0, 0, 60, 14);
/// let mut buf = Buffer::empty(area);
/// render_word_omitter(&omitter, area, &mut buf);
/// ```
pub fn render_word_omitter(omitter: &WordOmitter, area: Rect, buf: &mut Buffer) {
    let [input_area, stats_area, output_area, stop_words_area] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(area);

    render_text_input(
        "Input",
        omitter.input(),
        INPUT_PLACEHOLDER,
        true,
        input_area,
        buf,
    );
    Paragraph::new(stats_line(omitter)).render(stats_area, buf);
    render_output(omitter, output_area, buf);
    render_stop_words(omitter, stop_words_area, buf);
}

/// Builds the mode and statistics line.
///
/// The omitted count is only meaningful while filtering, so it is left out
/// in show-all mode.
fn stats_line(omitter: &WordOmitter) -> Line<'static> {
    let key_style = Style::default().fg(Color::DarkGray);
    let value_style = Style::default().fg(Color::White);
    let mode_style = match omitter.mode() {
        FilterMode::Omit => Style::default().fg(Color::Green),
        FilterMode::ShowAll => Style::default().fg(Color::Yellow),
    };

    let mut spans = vec![
        Span::styled("Mode: ", key_style),
        Span::styled(omitter.mode().label(), mode_style.add_modifier(Modifier::BOLD)),
        Span::styled("  Words: ", key_style),
        Span::styled(omitter.total_words().to_string(), value_style),
    ];
    if omitter.mode() == FilterMode::Omit {
        spans.push(Span::styled("  Omitted: ", key_style));
        spans.push(Span::styled(omitter.omitted_words().to_string(), value_style));
    }
    spans.push(Span::styled("  Characters: ", key_style));
    spans.push(Span::styled(omitter.char_count().to_string(), value_style));

    Line::from(spans)
}

fn render_output(omitter: &WordOmitter, area: Rect, buf: &mut Buffer) {
    let muted = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let text = if omitter.input().trim().is_empty() {
        Span::styled(OUTPUT_PLACEHOLDER, muted)
    } else if omitter.output().is_empty() {
        Span::styled("Processing...", muted)
    } else if omitter.is_settling() {
        Span::styled(
            omitter.output().to_owned(),
            Style::default().add_modifier(Modifier::DIM),
        )
    } else {
        Span::raw(omitter.output().to_owned())
    };

    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Paragraph::new(Line::from(text))
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}

fn render_stop_words(omitter: &WordOmitter, area: Rect, buf: &mut Buffer) {
    let words = omitter.stop_words().words();
    let line = if words.is_empty() {
        Line::from(Span::styled(
            "No stop words configured",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            words.join(", "),
            Style::default().fg(Color::Magenta),
        ))
    };

    let block = Block::default()
        .title(" Words being filtered ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));

    Paragraph::new(line).block(block).render(area, buf);
}
