//! Article table panel.

use fourfold_protocol::{ArticleTable, SortKey, articles::DATE_FORMAT};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, Widget},
};

/// Renders the sort controls above a table of the displayed articles.
///
/// The button of the active sort key is highlighted.
///
/// # Examples
///
/// ```
/// use fourfold_protocol::{ArticleTable, articles::sample_articles};
/// use fourfold_tui::widgets::render_article_table;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 80, 12);
/// let mut buf = Buffer::empty(area);
/// render_article_table(&ArticleTable::new(sample_articles()), area, &mut buf);
/// ```
pub fn render_article_table(table: &ArticleTable, area: Rect, buf: &mut Buffer) {
    let [controls_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_sort_controls(table.sort_key(), controls_area, buf);

    let header = Row::new(["Title", "Upvotes", "Date"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows = table.displayed().map(|article| {
        Row::new([
            Cell::from(article.title.clone()),
            Cell::from(article.upvotes.to_string()),
            Cell::from(article.date.format(DATE_FORMAT).to_string()),
        ])
    });

    let block = Block::default()
        .title(format!(" Articles · {} ", table.sort_key().label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    Table::new(
        rows,
        [
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(10),
        ],
    )
    .header(header)
    .column_spacing(2)
    .block(block)
    .render(table_area, buf);
}

fn render_sort_controls(active: SortKey, area: Rect, buf: &mut Buffer) {
    let button = |key: SortKey, shortcut: &'static str| {
        let style = if key == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        [
            Span::styled(format!(" {} ", key.label()), style),
            Span::styled(format!(" ({shortcut})  "), Style::default().fg(Color::DarkGray)),
        ]
    };

    let mut spans = vec![Span::raw("Sort: ")];
    spans.extend(button(SortKey::Upvotes, "u"));
    spans.extend(button(SortKey::Date, "d"));

    Paragraph::new(Line::from(spans)).render(area, buf);
}
