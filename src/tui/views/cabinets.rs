//! Cabinets view
//!
//! Record table in store order with the selection cursor.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Text,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::display::format_signed;
use crate::models::CabinetRecord;
use crate::tui::app::App;

/// Render the cabinets tab
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Cabinets ({}) ", app.store.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    if app.store.is_empty() {
        let text = Paragraph::new("No cabinets yet. Press 'a' to add one.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Min(18),    // Name
        Constraint::Length(14), // Cabinet
        Constraint::Length(16), // Revenue
        Constraint::Length(15), // Daily
        Constraint::Length(15), // Balance
        Constraint::Length(7),  // Before
        Constraint::Length(7),  // After
    ];

    let cutoff = &app.settings.cutoff_label;
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Name").style(bold),
        Cell::from("Cabinet").style(bold),
        Cell::from(right("Revenue")).style(bold),
        Cell::from(right("Daily")).style(bold),
        Cell::from(right("Balance")).style(bold),
        Cell::from(right("Before")).style(bold),
        Cell::from(right("After")).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let currency = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = app
        .records()
        .iter()
        .map(|record| record_row(record, currency))
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block.title_bottom(format!(" deals split at {} ", cutoff)))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

fn right(text: impl Into<String>) -> Text<'static> {
    Text::from(text.into()).alignment(Alignment::Right)
}

fn record_row(record: &CabinetRecord, currency: &str) -> Row<'static> {
    let daily_color = if record.daily_revenue.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    Row::new(vec![
        Cell::from(record.full_name()),
        Cell::from(record.cabinet_label.clone()),
        Cell::from(right(record.total_revenue.format_with_symbol(currency))),
        Cell::from(right(format_signed(record.daily_revenue, currency)))
            .style(Style::default().fg(daily_color)),
        Cell::from(right(record.balance.format_with_symbol(currency))),
        Cell::from(right(record.deals_before_midnight.to_string())),
        Cell::from(right(record.deals_after_midnight.to_string())),
    ])
}
