//! Status bar view
//!
//! Shows record count, total revenue and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::app::{ActiveTab, App};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let summary = app.summary();
    let currency = app.settings.currency_symbol.as_str();

    let mut spans = vec![
        Span::styled(" Cabinets: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.record_count.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled("Revenue: ", Style::default().fg(Color::White)),
        Span::styled(
            summary.total_revenue.format_with_symbol(currency),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(
            app.settings.baseline_strategy.to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    ];

    let hints = match app.active_tab {
        ActiveTab::Cabinets => " a:Add  e:Edit  d:Delete  x:Export  ?:Help  q:Quit ",
        _ => " a:Add  x:Export  ?:Help  q:Quit ",
    };

    let left_len: usize = spans.iter().map(|s| s.content.width()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.width());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
