//! Dashboard view
//!
//! Summary cards above a financial bar chart and a deal distribution chart.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
    },
    Frame,
};

use crate::models::Money;
use crate::reports::charts::{deals_max, financial_max};
use crate::reports::{deals_series, financial_series, summary_cards, SummaryCard};
use crate::tui::app::App;
use crate::tui::layout::DashboardLayout;

const REVENUE_COLOR: Color = Color::Blue;
const BALANCE_COLOR: Color = Color::Green;
const DAILY_COLOR: Color = Color::Yellow;
const BEFORE_COLOR: Color = Color::Magenta;
const AFTER_COLOR: Color = Color::Cyan;

/// Render the dashboard tab
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = DashboardLayout::new(area);

    let cards = summary_cards(
        &app.summary(),
        &app.settings.currency_symbol,
        &app.settings.cutoff_label,
    );
    for (card, card_area) in cards.iter().zip(layout.cards) {
        render_card(frame, card, card_area);
    }

    render_financial_chart(frame, app, layout.bar_chart);
    render_deals_chart(frame, app, layout.line_chart);
}

fn render_card(frame: &mut Frame, card: &SummaryCard, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", card.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let lines = vec![
        Line::from(Span::styled(
            card.value.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            card.caption.clone(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn empty_chart(frame: &mut Frame, block: Block, area: Rect) {
    let text = Paragraph::new("No cabinets yet. Press 'a' to add one.")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(text, area);
}

/// Bar height in whole currency units; negative amounts draw as empty bars
fn bar_value(amount: Money) -> u64 {
    amount.to_f64().max(0.0) as u64
}

fn render_financial_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Financial indicators ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let series = financial_series(app.records());
    if series.is_empty() {
        empty_chart(frame, block, area);
        return;
    }

    let bar = |value: Money, color: Color| {
        Bar::default()
            .value(bar_value(value))
            .text_value(String::new())
            .style(Style::default().fg(color))
    };

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(bar_value(financial_max(&series)).max(1));

    for point in &series {
        let group = BarGroup::default()
            .label(Line::from(point.label.clone()))
            .bars(&[
                bar(point.total_revenue, REVENUE_COLOR),
                bar(point.balance, BALANCE_COLOR),
                bar(point.daily_revenue, DAILY_COLOR),
            ]);
        chart = chart.data(group);
    }

    frame.render_widget(chart, area);
    render_legend(
        frame,
        area,
        &[
            ("Revenue", REVENUE_COLOR),
            ("Balance", BALANCE_COLOR),
            ("Daily", DAILY_COLOR),
        ],
    );
}

fn render_deals_chart(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Deal distribution ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let series = deals_series(app.records());
    if series.is_empty() {
        empty_chart(frame, block, area);
        return;
    }

    let before: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.before_midnight)))
        .collect();
    let after: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.after_midnight)))
        .collect();

    let cutoff = &app.settings.cutoff_label;
    let datasets = vec![
        Dataset::default()
            .name(format!("Before {}", cutoff))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(BEFORE_COLOR))
            .data(&before),
        Dataset::default()
            .name(format!("After {}", cutoff))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(AFTER_COLOR))
            .data(&after),
    ];

    let x_max = (series.len().saturating_sub(1)).max(1) as f64;
    let y_max = f64::from(deals_max(&series).max(1));
    let x_labels: Vec<Span> = series
        .iter()
        .map(|p| Span::raw(p.label.clone()))
        .collect();
    let y_labels = vec![
        Span::raw("0"),
        Span::raw(format!("{}", deals_max(&series))),
    ];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// Colour key drawn on the bottom border of a chart
fn render_legend(frame: &mut Frame, area: Rect, entries: &[(&str, Color)]) {
    if area.height < 2 {
        return;
    }
    let mut spans = vec![Span::raw(" ")];
    for (name, color) in entries {
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::raw(format!("{} ", name)));
    }
    let legend = Rect::new(
        area.x + 1,
        area.y + area.height - 1,
        area.width.saturating_sub(2),
        1,
    );
    frame.render_widget(Paragraph::new(Line::from(spans)), legend);
}
