//! Statistics aggregation
//!
//! Derives the dashboard summary from the current record set. Nothing is
//! cached: every call walks the records again.

use serde::Serialize;

use crate::models::{CabinetRecord, Money};

/// Aggregate figures over a set of cabinet records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    /// Sum of every record's total revenue
    pub total_revenue: Money,
    /// Sum of every record's balance
    pub total_balance: Money,
    /// Deals on both sides of the cutoff, across all records
    pub total_deals: u64,
    /// Mean daily revenue; zero for an empty set
    pub average_daily_revenue: Money,
    /// Number of records summarized
    pub record_count: usize,
}

/// Summarize `records`
pub fn summarize(records: &[CabinetRecord]) -> StatisticsSummary {
    let total_revenue = records.iter().map(|r| r.total_revenue).sum();
    let total_balance = records.iter().map(|r| r.balance).sum();
    let total_deals = records.iter().map(CabinetRecord::deal_count).sum();
    let daily_sum: Money = records.iter().map(|r| r.daily_revenue).sum();

    StatisticsSummary {
        total_revenue,
        total_balance,
        total_deals,
        average_daily_revenue: Money::mean(daily_sum, records.len()),
        record_count: records.len(),
    }
}
