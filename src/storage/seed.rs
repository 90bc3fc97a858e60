//! Demo records for a fresh session
//!
//! When `seed_demo_data` is enabled the dashboard starts with two sample
//! cabinets instead of an empty table.

use chrono::NaiveDate;

use crate::models::{CabinetRecord, Money, RecordId};

use super::RecordStore;

/// The two sample cabinets, dated `date`
pub fn demo_records(date: NaiveDate) -> Vec<CabinetRecord> {
    vec![
        CabinetRecord {
            id: RecordId::new(),
            last_name: "Ivanov".into(),
            first_name: "Petr".into(),
            cabinet_label: "Cabinet A".into(),
            total_revenue: Money::from_major(150_000),
            daily_revenue: Money::from_major(5_000),
            balance: Money::from_major(45_000),
            deals_before_midnight: 12,
            deals_after_midnight: 8,
            date,
        },
        CabinetRecord {
            id: RecordId::new(),
            last_name: "Smirnova".into(),
            first_name: "Anna".into(),
            cabinet_label: "Cabinet B".into(),
            total_revenue: Money::from_major(220_000),
            daily_revenue: Money::from_major(7_500),
            balance: Money::from_major(68_000),
            deals_before_midnight: 18,
            deals_after_midnight: 5,
            date,
        },
    ]
}

/// A store holding the demo records
pub fn demo_store(date: NaiveDate) -> RecordStore {
    RecordStore::with_records(demo_records(date))
}
