//! Service layer for cabinet-stats
//!
//! The service layer holds the domain logic on top of the record store:
//! revenue reconciliation, aggregation, batch intake and the audited record
//! operations.

pub mod cabinet;
pub mod import;
pub mod reconciliation;
pub mod summary;

pub use cabinet::CabinetService;
pub use reconciliation::{compute_daily_revenue, compute_daily_revenue_with, BaselineStrategy};
pub use summary::{summarize, StatisticsSummary};
