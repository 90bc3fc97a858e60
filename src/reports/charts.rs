//! Dashboard chart and card data
//!
//! Projects the record list into the series the dashboard draws: one bar
//! group per record for the financial indicators, one point per record for
//! the deal split, and the four summary cards.

use crate::models::{CabinetRecord, Money};
use crate::services::summary::StatisticsSummary;

/// One bar group of the "Financial indicators" chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinancialPoint {
    /// Cabinet label shown on the x axis
    pub label: String,
    pub total_revenue: Money,
    pub balance: Money,
    pub daily_revenue: Money,
}

/// One x position of the "Deal distribution" chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealsPoint {
    pub label: String,
    pub before_midnight: u32,
    pub after_midnight: u32,
}

/// Financial series, one point per record in store order
pub fn financial_series(records: &[CabinetRecord]) -> Vec<FinancialPoint> {
    records
        .iter()
        .map(|r| FinancialPoint {
            label: r.cabinet_label.clone(),
            total_revenue: r.total_revenue,
            balance: r.balance,
            daily_revenue: r.daily_revenue,
        })
        .collect()
}

/// Deal series, one point per record in store order
pub fn deals_series(records: &[CabinetRecord]) -> Vec<DealsPoint> {
    records
        .iter()
        .map(|r| DealsPoint {
            label: r.cabinet_label.clone(),
            before_midnight: r.deals_before_midnight,
            after_midnight: r.deals_after_midnight,
        })
        .collect()
}

/// Largest amount across the financial series; sets the bar chart scale
pub fn financial_max(series: &[FinancialPoint]) -> Money {
    series
        .iter()
        .flat_map(|p| [p.total_revenue, p.balance, p.daily_revenue])
        .max()
        .unwrap_or_default()
        .max(Money::zero())
}

/// Largest deal count across the deal series
pub fn deals_max(series: &[DealsPoint]) -> u32 {
    series
        .iter()
        .map(|p| p.before_midnight.max(p.after_midnight))
        .max()
        .unwrap_or(0)
}

/// A headline figure on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub title: &'static str,
    pub value: String,
    pub caption: String,
}

/// The four dashboard cards for `summary`
pub fn summary_cards(
    summary: &StatisticsSummary,
    currency: &str,
    cutoff_label: &str,
) -> Vec<SummaryCard> {
    vec![
        SummaryCard {
            title: "Total revenue",
            value: summary.total_revenue.format_with_symbol(currency),
            caption: format!("across {} cabinets", summary.record_count),
        },
        SummaryCard {
            title: "Average daily revenue",
            value: summary.average_daily_revenue.format_with_symbol(currency),
            caption: "per cabinet".to_string(),
        },
        SummaryCard {
            title: "Total balance",
            value: summary.total_balance.format_with_symbol(currency),
            caption: "current balance".to_string(),
        },
        SummaryCard {
            title: "Total deals",
            value: summary.total_deals.to_string(),
            caption: format!("before and after {}", cutoff_label),
        },
    ]
}
