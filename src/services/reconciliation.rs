//! Revenue reconciliation
//!
//! Turns a newly reported cumulative revenue figure into the revenue gained
//! since the previous snapshot of the same cabinet. Cabinets are matched by
//! exact, case-sensitive label. Everything here is a pure function of its
//! inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{CabinetRecord, Money};

/// How the previous snapshot of a cabinet is chosen among label matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineStrategy {
    /// The first matching record in store order, regardless of date
    // TODO: make MostRecentByDate the default once operators confirm that a
    // repeated label means the same cabinet's history.
    #[default]
    FirstInStoreOrder,
    /// The matching record with the latest date; ties go to the later one
    /// in store order
    MostRecentByDate,
}

impl fmt::Display for BaselineStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstInStoreOrder => write!(f, "first-in-store-order"),
            Self::MostRecentByDate => write!(f, "most-recent-by-date"),
        }
    }
}

/// Find the record whose total serves as the baseline for `cabinet_label`
pub fn find_baseline<'a>(
    strategy: BaselineStrategy,
    cabinet_label: &str,
    records: &'a [CabinetRecord],
) -> Option<&'a CabinetRecord> {
    let mut matches = records.iter().filter(|r| r.cabinet_label == cabinet_label);
    match strategy {
        BaselineStrategy::FirstInStoreOrder => matches.next(),
        // max_by_key keeps the last of equal maxima
        BaselineStrategy::MostRecentByDate => matches.max_by_key(|r| r.date),
    }
}

/// Daily revenue of a new snapshot: `new_total` minus the first stored total
/// for the same cabinet label, or `new_total` itself when the cabinet is new.
///
/// The result may be negative when revenue went down; that is recorded, not
/// rejected.
pub fn compute_daily_revenue(
    cabinet_label: &str,
    new_total: Money,
    records: &[CabinetRecord],
) -> Money {
    compute_daily_revenue_with(BaselineStrategy::FirstInStoreOrder, cabinet_label, new_total, records)
}

/// [`compute_daily_revenue`] with an explicit baseline strategy
pub fn compute_daily_revenue_with(
    strategy: BaselineStrategy,
    cabinet_label: &str,
    new_total: Money,
    records: &[CabinetRecord],
) -> Money {
    let previous = find_baseline(strategy, cabinet_label, records)
        .map(|r| r.total_revenue)
        .unwrap_or_default();
    new_total - previous
}
