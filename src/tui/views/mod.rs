//! TUI Views module
//!
//! Contains the three tabs (dashboard, cabinets, statistics), the tab bar
//! and the status bar.

pub mod cabinets;
pub mod dashboard;
pub mod statistics;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::app::{ActiveDialog, ActiveTab, App};
use super::dialogs;
use super::layout::{notification_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    render_tabs(frame, app, layout.tabs);

    match app.active_tab {
        ActiveTab::Dashboard => dashboard::render(frame, app, layout.main),
        ActiveTab::Cabinets => cabinets::render(frame, app, layout.main),
        ActiveTab::Statistics => statistics::render(frame, app, layout.main),
    }

    status_bar::render(frame, app, layout.status_bar);

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            notification_rect(layout.main),
        );
    }
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = ActiveTab::ALL
        .iter()
        .enumerate()
        .map(|(i, tab)| Line::from(format!(" {} {} ", i + 1, tab.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .title(" Cabinet statistics ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL),
        )
        .select(app.active_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, area);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::AddRecord | ActiveDialog::EditRecord(_) => {
            dialogs::record_form::render(frame, app);
        }
        ActiveDialog::ConfirmDelete(id) => {
            let message = dialogs::confirm::delete_message(app, id);
            dialogs::confirm::render(frame, &message);
        }
        ActiveDialog::None => {}
    }
}
