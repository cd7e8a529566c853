//! Slideshow panel.

use fourfold_protocol::Slideshow;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Widget, Wrap},
};

/// Renders the progress bar, dot indicators, current slide, footer and
/// navigation hints.
///
/// # Layout
///
/// ```text
/// ╭ Slide 2 of 8 ──────────────────────────╮
/// │██████████             25%              │
/// ╰────────────────────────────────────────╯
///                ○ ● ○ ○ ○ ○ ○ ○
/// ╭ Neural Networks ───────────────────────╮
/// │ ...                                    │
/// ╰────────────────────────────────────────╯
/// Current: Neural Networks  Progress: 25%
/// ← Previous   → Next   r Restart
/// ```
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{Slideshow, slideshow::sample_slides};
/// use fourfold_tui::widgets::render_slideshow;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let show = Slideshow::new(sample_slides()).unwrap();
/// let area = Rect::new(0, 0, 60, 16);
/// let mut buf = Buffer::empty(area);
/// render_slideshow(&show, area, &mut buf);
/// ```
pub fn render_slideshow(show: &Slideshow, area: Rect, buf: &mut Buffer) {
    let [progress_area, dots_area, slide_area, footer_area, hints_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    render_progress(show, progress_area, buf);
    Paragraph::new(dots_line(show.current_index(), show.len()))
        .alignment(Alignment::Center)
        .render(dots_area, buf);
    render_slide(show, slide_area, buf);
    Paragraph::new(footer_line(show)).render(footer_area, buf);
    Paragraph::new(hints_line(show)).render(hints_area, buf);
}

fn render_progress(show: &Slideshow, area: Rect, buf: &mut Buffer) {
    let percent = u16::try_from(show.progress_percent()).unwrap_or(100).min(100);
    let block = Block::default()
        .title(format!(" {} ", counter_label(show)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .render(area, buf);
}

fn render_slide(show: &Slideshow, area: Rect, buf: &mut Buffer) {
    let slide = show.current_slide();
    let (border_style, text_style) = if show.is_transitioning() {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().add_modifier(Modifier::DIM),
        )
    } else {
        (Style::default().fg(Color::Cyan), Style::default())
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", slide.title),
            border_style.add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);

    Paragraph::new(slide.text.as_str())
        .style(text_style)
        .block(block)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Returns the "Slide i of N" counter, one-based.
fn counter_label(show: &Slideshow) -> String {
    format!("Slide {} of {}", show.current_index() + 1, show.len())
}

/// One dot per slide; the current one is filled.
fn dots_line(current: usize, len: usize) -> Line<'static> {
    let spans: Vec<Span<'static>> = (0..len)
        .map(|index| {
            if index == current {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();
    Line::from(spans)
}

fn footer_line(show: &Slideshow) -> Line<'static> {
    let key_style = Style::default().fg(Color::DarkGray);
    Line::from(vec![
        Span::styled("Current: ", key_style),
        Span::raw(show.current_slide().title.clone()),
        Span::styled("  Progress: ", key_style),
        Span::raw(format!("{}%", show.progress_percent())),
    ])
}

/// Navigation hints, greyed out where the command would be a no-op.
fn hints_line(show: &Slideshow) -> Line<'static> {
    let busy = show.is_transitioning();
    let hint = |key: &'static str, label: &'static str, enabled: bool| {
        let (key_style, text_style) = if enabled {
            (
                Style::default().fg(Color::Yellow),
                Style::default().fg(Color::White),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT),
            )
        };
        [
            Span::styled(key, key_style),
            Span::styled(format!(" {label}   "), text_style),
        ]
    };

    let mut spans = Vec::with_capacity(6);
    spans.extend(hint("←", "Previous", !busy && !show.is_first()));
    spans.extend(hint("→", "Next", !busy && !show.is_last()));
    spans.extend(hint("r", "Restart", !busy && !show.is_first()));
    Line::from(spans)
}
