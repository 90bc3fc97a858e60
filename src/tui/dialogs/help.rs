//! Help dialog
//!
//! Shows keyboard shortcuts for the current tab

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveTab, App};
use crate::tui::layout::centered_rect_fixed;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let help_lines = get_help_lines(app.active_tab);
    let area = centered_rect_fixed(56, help_lines.len() as u16 + 2, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn heading(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Get help lines for the current tab
fn get_help_lines(tab: ActiveTab) -> Vec<Line<'static>> {
    let mut lines = vec![
        heading("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("Tab/S-Tab", "Next/previous tab"),
        key_line("1/2/3", "Dashboard/Cabinets/Statistics"),
        key_line("a", "Add cabinet"),
        key_line("x", "Export statistics"),
        Line::from(""),
    ];

    match tab {
        ActiveTab::Dashboard => {}
        ActiveTab::Cabinets => {
            lines.push(heading("Cabinets"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("e/Enter", "Edit selected cabinet"));
            lines.push(key_line("d/Del", "Delete selected cabinet"));
            lines.push(Line::from(""));
        }
        ActiveTab::Statistics => {
            lines.push(heading("Statistics"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Scroll cabinets"));
            lines.push(Line::from(""));
        }
    }

    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
