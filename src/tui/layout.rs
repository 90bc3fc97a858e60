//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: tab bar, main panel, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Tab bar with the title
    pub tabs: Rect,
    /// Main content area
    pub main: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Tabs
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            tabs: chunks[0],
            main: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Layout for the dashboard tab
pub struct DashboardLayout {
    /// The four summary cards, left to right
    pub cards: [Rect; 4],
    /// Financial indicators bar chart
    pub bar_chart: Rect,
    /// Deal distribution line chart
    pub line_chart: Rect,
}

impl DashboardLayout {
    /// Calculate dashboard layout
    pub fn new(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(6)])
            .split(area);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[0]);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);

        Self {
            cards: [cards[0], cards[1], cards[2], cards[3]],
            bar_chart: charts[0],
            line_chart: charts[1],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

/// Area for a toast in the top-right corner of `r`
pub fn notification_rect(r: Rect) -> Rect {
    let width = 44.min(r.width);
    let height = 4.min(r.height);
    Rect::new(r.x + r.width - width, r.y + 1.min(r.height - height), width, height)
}
