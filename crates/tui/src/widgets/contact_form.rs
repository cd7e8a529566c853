//! Contact form panel.

use fourfold_protocol::{ContactForm, FormField};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::input::render_text_input;
use crate::layout::INPUT_HEIGHT;

/// Renders the contact form: one input per field followed by the result
/// of the last submit attempt.
///
/// # Layout
///
/// ```text
/// ╭ Name ──────────────────────────╮
/// │Bob▏                            │
/// ╰────────────────────────────────╯
/// ╭ Email ─────────────────────────╮
/// │Enter your email                │
/// ╰────────────────────────────────╯
/// ╭ Message ───────────────────────╮
/// │Enter your message              │
/// ╰────────────────────────────────╯
/// ╭ Submission ────────────────────╮
/// │All fields are required.        │
/// ╰────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{ContactForm, FormField};
/// use fourfold_tui::widgets::render_contact_form;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 60, 16);
/// let mut buf = Buffer::empty(area);
/// render_contact_form(&ContactForm::new(), FormField::Name, area, &mut buf);
/// ```
pub fn render_contact_form(form: &ContactForm, focus: FormField, area: Rect, buf: &mut Buffer) {
    let [name_area, email_area, message_area, result_area] = Layout::vertical([
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Length(INPUT_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    for (field, field_area) in FormField::ALL
        .into_iter()
        .zip([name_area, email_area, message_area])
    {
        render_text_input(
            field.label(),
            form.data().get(field),
            field.placeholder(),
            field == focus,
            field_area,
            buf,
        );
    }

    render_result(form, result_area, buf);
}

fn render_result(form: &ContactForm, area: Rect, buf: &mut Buffer) {
    let mut lines = Vec::new();

    if let Some(error) = form.error() {
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(submission) = form.submission() {
        lines.push(Line::from(Span::styled(
            "Submitted Information",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        for field in FormField::ALL {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(submission.get(field).to_owned()),
            ]));
        }
    } else if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing submitted yet",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let block = Block::default()
        .title(" Submission ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .render(area, buf);
}
