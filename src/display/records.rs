//! Record display formatting
//!
//! Formats cabinet records for terminal output as a table.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::CabinetRecord;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Cabinet")]
    cabinet: String,
    #[tabled(rename = "Revenue")]
    total_revenue: String,
    #[tabled(rename = "Daily")]
    daily_revenue: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Before")]
    before: u32,
    #[tabled(rename = "After")]
    after: u32,
    #[tabled(rename = "Date")]
    date: String,
}

impl RecordRow {
    fn new(record: &CabinetRecord, currency: &str, date_format: &str) -> Self {
        Self {
            id: record.id.to_string(),
            name: record.full_name(),
            cabinet: record.cabinet_label.clone(),
            total_revenue: record.total_revenue.format_with_symbol(currency),
            daily_revenue: format_signed(record.daily_revenue, currency),
            balance: record.balance.format_with_symbol(currency),
            before: record.deals_before_midnight,
            after: record.deals_after_midnight,
            date: format_date(record.date, date_format),
        }
    }
}

/// Daily revenue with an explicit sign, e.g. `+5 000.00 ₽`
pub fn format_signed(amount: crate::models::Money, currency: &str) -> String {
    let formatted = amount.format_with_symbol(currency);
    if amount.is_negative() {
        formatted
    } else {
        format!("+{}", formatted)
    }
}

/// Format `date` with a user-supplied strftime pattern
///
/// Falls back to ISO format when the pattern is invalid.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format the record list as a table, in store order
pub fn format_record_table(
    records: &[CabinetRecord],
    currency: &str,
    date_format: &str,
) -> String {
    if records.is_empty() {
        return "No cabinets yet.".to_string();
    }

    let rows = records.iter().map(|r| RecordRow::new(r, currency, date_format));
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(3..8)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::storage::seed::demo_records;

    #[test]
    fn test_record_table() {
        let records = demo_records(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        let table = format_record_table(&records, "₽", "%Y-%m-%d");

        assert!(table.contains("Cabinet"));
        assert!(table.contains("Ivanov Petr"));
        assert!(table.contains("150 000.00 ₽"));
        assert!(table.contains("+7 500.00 ₽"));
        let a = table.find("Cabinet A").unwrap();
        let b = table.find("Cabinet B").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_record_table(&[], "₽", "%Y-%m-%d"), "No cabinets yet.");
    }

    #[test]
    fn test_format_date_falls_back_on_bad_pattern() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        assert_eq!(format_date(date, "%d.%m.%Y"), "16.10.2026");
        assert_eq!(format_date(date, "%Q"), "2026-10-16");
    }

    #[test]
    fn test_format_signed() {
        assert_eq!(format_signed(Money::from_major(50), "₽"), "+50.00 ₽");
        assert_eq!(format_signed(Money::from_major(-20), "₽"), "-20.00 ₽");
        assert_eq!(format_signed(Money::zero(), ""), "+0.00");
    }
}
