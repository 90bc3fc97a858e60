//! Reports module for cabinet-stats
//!
//! Projections of the record list used by the dashboard: chart series and
//! summary cards.

pub mod charts;

pub use charts::{
    deals_series, financial_series, summary_cards, DealsPoint, FinancialPoint, SummaryCard,
};
