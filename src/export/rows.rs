//! Flat export row
//!
//! Mirrors `CabinetRecord` field for field, with amounts in whole currency
//! units so spreadsheets see ordinary decimals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::CabinetRecord;

/// Column headers, in record field order
pub const EXPORT_HEADERS: [&str; 10] = [
    "id",
    "lastName",
    "firstName",
    "cabinetLabel",
    "totalRevenue",
    "dailyRevenue",
    "balance",
    "dealsBeforeMidnight",
    "dealsAfterMidnight",
    "date",
];

/// One exported record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub id: String,
    pub last_name: String,
    pub first_name: String,
    pub cabinet_label: String,
    pub total_revenue: f64,
    pub daily_revenue: f64,
    pub balance: f64,
    pub deals_before_midnight: u32,
    pub deals_after_midnight: u32,
    pub date: NaiveDate,
}

impl From<&CabinetRecord> for ExportRow {
    fn from(record: &CabinetRecord) -> Self {
        Self {
            id: record.id.as_uuid().to_string(),
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            cabinet_label: record.cabinet_label.clone(),
            total_revenue: record.total_revenue.to_f64(),
            daily_revenue: record.daily_revenue.to_f64(),
            balance: record.balance.to_f64(),
            deals_before_midnight: record.deals_before_midnight,
            deals_after_midnight: record.deals_after_midnight,
            date: record.date,
        }
    }
}

/// Convert a record list to export rows, order preserved
pub fn to_rows(records: &[CabinetRecord]) -> Vec<ExportRow> {
    records.iter().map(ExportRow::from).collect()
}
