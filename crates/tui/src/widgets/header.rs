//! Header bar with the application title and panel tabs.

use fourfold_protocol::Panel;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Widget},
};

/// Width reserved for the title on the left of the tabs.
const TITLE_WIDTH: u16 = 11;

/// Renders the header: the title on the left and one tab per panel, with
/// the active panel highlighted.
pub fn render_header(active: Panel, area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    block.render(area, buf);

    let [title_area, tabs_area] =
        Layout::horizontal([Constraint::Length(TITLE_WIDTH), Constraint::Min(0)]).areas(inner);

    Paragraph::new(Line::from(Span::styled(
        "fourfold",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )))
    .render(title_area, buf);

    Tabs::new(Panel::ALL.map(Panel::title))
        .select(active.index())
        .style(Style::default().fg(Color::DarkGray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│")
        .render(tabs_area, buf);
}
