//! Statistics view
//!
//! One detail card per record, two columns, scrolled with j/k.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::display::{format_date, format_signed};
use crate::models::CabinetRecord;
use crate::tui::app::App;

const CARD_HEIGHT: u16 = 8;
const COLUMNS: usize = 2;

/// Render the statistics tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let records = app.records();
    if records.is_empty() {
        let text = Paragraph::new("No cabinets yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().title(" Statistics ").borders(Borders::ALL));
        frame.render_widget(text, area);
        return;
    }

    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let first_row = app.stats_offset / COLUMNS;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
        .split(area);

    for (row_index, row_area) in rows.iter().enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);
        for (col_index, card_area) in columns.iter().enumerate() {
            let index = (first_row + row_index) * COLUMNS + col_index;
            if let Some(record) = records.get(index) {
                render_card(frame, app, record, *card_area);
            }
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, record: &CabinetRecord, area: Rect) {
    let currency = app.settings.currency_symbol.as_str();
    let cutoff = &app.settings.cutoff_label;
    let label = Style::default().fg(Color::DarkGray);
    let daily_color = if record.daily_revenue.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let block = Block::default()
        .title(format!(" {} ", record.cabinet_label))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(format!(" {} ", format_date(record.date, &app.settings.date_format)))
        .borders(Borders::ALL);

    let lines = vec![
        Line::from(Span::styled(
            record.full_name(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled("Total revenue:  ", label),
            Span::raw(record.total_revenue.format_with_symbol(currency)),
        ]),
        Line::from(vec![
            Span::styled("Daily revenue:  ", label),
            Span::styled(
                format_signed(record.daily_revenue, currency),
                Style::default().fg(daily_color),
            ),
        ]),
        Line::from(vec![
            Span::styled("Balance:        ", label),
            Span::raw(record.balance.format_with_symbol(currency)),
        ]),
        Line::from(vec![
            Span::styled(format!("Deals before {}: ", cutoff), label),
            Span::raw(record.deals_before_midnight.to_string()),
            Span::styled("  after: ", label),
            Span::raw(record.deals_after_midnight.to_string()),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
