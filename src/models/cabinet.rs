//! Cabinet record model
//!
//! A `CabinetRecord` is one day's snapshot of an operator's cabinet: revenue
//! to date, the revenue gained since the previous snapshot of the same
//! cabinet, account balance and deal counts split by the midnight cutoff.
//!
//! Raw user input enters as a [`CabinetDraft`] (plain text, as typed into a
//! form or read from a batch file) and is validated into a [`CabinetEntry`]
//! before it reaches the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::RecordId;
use super::money::{Money, MAX_AMOUNT};
use crate::error::{CabinetError, CabinetResult};

/// Longest accepted name or cabinet label
pub const MAX_TEXT_LEN: usize = 100;

/// Date format used for the record date in drafts and exports
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One cabinet snapshot as held by the record store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetRecord {
    /// Unique identifier, assigned at creation
    pub id: RecordId,

    /// Operator last name
    pub last_name: String,

    /// Operator first name
    pub first_name: String,

    /// Cabinet label; the key used to find the previous snapshot
    pub cabinet_label: String,

    /// Cumulative revenue as of `date`
    pub total_revenue: Money,

    /// Revenue gained since the previous snapshot of the same cabinet.
    ///
    /// Daily revenue is a snapshot, not a live projection: it is computed once
    /// when the record is created and is left alone by later edits.
    pub daily_revenue: Money,

    /// Current account balance
    pub balance: Money,

    /// Deals closed before the midnight cutoff
    pub deals_before_midnight: u32,

    /// Deals closed after the midnight cutoff
    pub deals_after_midnight: u32,

    /// Day this snapshot was taken
    pub date: NaiveDate,
}

impl CabinetRecord {
    /// Build a new record from a validated entry and its reconciled daily
    /// revenue. A fresh id is generated.
    pub fn from_entry(entry: CabinetEntry, daily_revenue: Money, date: NaiveDate) -> Self {
        Self {
            id: RecordId::new(),
            last_name: entry.last_name,
            first_name: entry.first_name,
            cabinet_label: entry.cabinet_label,
            total_revenue: entry.total_revenue,
            daily_revenue,
            balance: entry.balance,
            deals_before_midnight: entry.deals_before_midnight,
            deals_after_midnight: entry.deals_after_midnight,
            date,
        }
    }

    /// "Last First", as shown in tables
    pub fn full_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
    }

    /// Deals on both sides of the cutoff
    pub fn deal_count(&self) -> u64 {
        u64::from(self.deals_before_midnight) + u64::from(self.deals_after_midnight)
    }

    /// Validate the record's free-text and monetary fields
    pub fn validate(&self) -> CabinetResult<()> {
        check_text(FIELD_LAST_NAME, &self.last_name)?;
        check_text(FIELD_FIRST_NAME, &self.first_name)?;
        check_text(FIELD_CABINET, &self.cabinet_label)?;
        check_non_negative(FIELD_TOTAL_REVENUE, self.total_revenue)?;
        check_non_negative(FIELD_BALANCE, self.balance)?;
        Ok(())
    }
}

impl fmt::Display for CabinetRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.cabinet_label, self.full_name())
    }
}

/// A validated, well-typed new entry awaiting reconciliation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CabinetEntry {
    pub last_name: String,
    pub first_name: String,
    pub cabinet_label: String,
    pub total_revenue: Money,
    pub balance: Money,
    pub deals_before_midnight: u32,
    pub deals_after_midnight: u32,
    /// Snapshot date; `None` means "today"
    pub date: Option<NaiveDate>,
}

pub const FIELD_LAST_NAME: &str = "lastName";
pub const FIELD_FIRST_NAME: &str = "firstName";
pub const FIELD_CABINET: &str = "cabinet";
pub const FIELD_TOTAL_REVENUE: &str = "totalRevenue";
pub const FIELD_DAILY_REVENUE: &str = "dailyRevenue";
pub const FIELD_BALANCE: &str = "balance";
pub const FIELD_DEALS_BEFORE: &str = "dealsBeforeMidnight";
pub const FIELD_DEALS_AFTER: &str = "dealsAfterMidnight";
pub const FIELD_DATE: &str = "date";

/// Unvalidated text input for a cabinet entry
///
/// Column names match the batch CSV header. `daily_revenue` is only read when
/// the draft edits an existing record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CabinetDraft {
    pub last_name: String,
    pub first_name: String,
    #[serde(alias = "cabinetLabel")]
    pub cabinet: String,
    pub total_revenue: String,
    #[serde(default)]
    pub daily_revenue: Option<String>,
    pub balance: String,
    pub deals_before_midnight: String,
    pub deals_after_midnight: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl CabinetDraft {
    /// Prefill a draft from an existing record (edit form)
    pub fn from_record(record: &CabinetRecord) -> Self {
        Self {
            last_name: record.last_name.clone(),
            first_name: record.first_name.clone(),
            cabinet: record.cabinet_label.clone(),
            total_revenue: record.total_revenue.to_string(),
            daily_revenue: Some(record.daily_revenue.to_string()),
            balance: record.balance.to_string(),
            deals_before_midnight: record.deals_before_midnight.to_string(),
            deals_after_midnight: record.deals_after_midnight.to_string(),
            date: Some(record.date.format(DATE_FORMAT).to_string()),
        }
    }

    /// Validate the draft into a new entry
    ///
    /// Fails with `CabinetError::Validation` naming the first offending field.
    pub fn parse(&self) -> CabinetResult<CabinetEntry> {
        let entry = CabinetEntry {
            last_name: parse_text(FIELD_LAST_NAME, &self.last_name)?,
            first_name: parse_text(FIELD_FIRST_NAME, &self.first_name)?,
            cabinet_label: parse_text(FIELD_CABINET, &self.cabinet)?,
            total_revenue: parse_amount(FIELD_TOTAL_REVENUE, &self.total_revenue)?,
            balance: parse_amount(FIELD_BALANCE, &self.balance)?,
            deals_before_midnight: parse_deals(FIELD_DEALS_BEFORE, &self.deals_before_midnight)?,
            deals_after_midnight: parse_deals(FIELD_DEALS_AFTER, &self.deals_after_midnight)?,
            date: parse_date(self.date.as_deref())?,
        };

        check_non_negative(FIELD_TOTAL_REVENUE, entry.total_revenue)?;
        check_non_negative(FIELD_BALANCE, entry.balance)?;

        Ok(entry)
    }

    /// Validate the draft as an edit of `record`
    ///
    /// Every editable field is taken from the draft. The id and date are kept.
    /// `daily_revenue` is taken verbatim from the draft when present; it is
    /// never recomputed.
    pub fn apply_to(&self, record: &CabinetRecord) -> CabinetResult<CabinetRecord> {
        let entry = self.parse()?;
        let daily_revenue = match self.daily_revenue.as_deref() {
            Some(text) => parse_amount(FIELD_DAILY_REVENUE, text)?,
            None => record.daily_revenue,
        };

        Ok(CabinetRecord {
            id: record.id,
            last_name: entry.last_name,
            first_name: entry.first_name,
            cabinet_label: entry.cabinet_label,
            total_revenue: entry.total_revenue,
            daily_revenue,
            balance: entry.balance,
            deals_before_midnight: entry.deals_before_midnight,
            deals_after_midnight: entry.deals_after_midnight,
            date: record.date,
        })
    }
}

fn parse_text(field: &'static str, value: &str) -> CabinetResult<String> {
    let value = value.trim();
    check_text(field, value)?;
    Ok(value.to_string())
}

fn check_text(field: &'static str, value: &str) -> CabinetResult<()> {
    if value.trim().is_empty() {
        return Err(CabinetError::validation(field, "is required"));
    }
    let len = value.chars().count();
    if len > MAX_TEXT_LEN {
        return Err(CabinetError::validation(
            field,
            format!("too long ({} chars, max {})", len, MAX_TEXT_LEN),
        ));
    }
    Ok(())
}

fn parse_amount(field: &'static str, value: &str) -> CabinetResult<Money> {
    if value.trim().is_empty() {
        return Err(CabinetError::validation(field, "is required"));
    }
    let amount =
        Money::parse(value).map_err(|e| CabinetError::validation(field, e.to_string()))?;
    if amount > MAX_AMOUNT || amount < -MAX_AMOUNT {
        return Err(CabinetError::validation(
            field,
            format!("cannot exceed {}", MAX_AMOUNT.format_grouped()),
        ));
    }
    Ok(amount)
}

fn check_non_negative(field: &'static str, amount: Money) -> CabinetResult<()> {
    if amount.is_negative() {
        return Err(CabinetError::validation(field, "cannot be negative"));
    }
    Ok(())
}

fn parse_deals(field: &'static str, value: &str) -> CabinetResult<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CabinetError::validation(field, "is required"));
    }
    value.parse::<u32>().map_err(|_| {
        CabinetError::validation(
            field,
            format!("'{}' is not a non-negative whole number", value),
        )
    })
}

fn parse_date(value: Option<&str>) -> CabinetResult<Option<NaiveDate>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, DATE_FORMAT)
            .map(Some)
            .map_err(|_| {
                CabinetError::validation(FIELD_DATE, format!("'{}' is not a YYYY-MM-DD date", text))
            }),
    }
}
