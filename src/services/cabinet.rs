//! Cabinet service
//!
//! Composes the reconciler, the record store and the audit log into the
//! create, update and remove operations the presentation layer calls.

use chrono::NaiveDate;

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::error::CabinetResult;
use crate::models::{CabinetEntry, CabinetRecord, Money, RecordId};
use crate::storage::RecordStore;

use super::reconciliation::{compute_daily_revenue_with, find_baseline, BaselineStrategy};

/// Service for cabinet record management
pub struct CabinetService<'a> {
    store: &'a mut RecordStore,
    strategy: BaselineStrategy,
    audit: Option<&'a AuditLogger>,
}

impl<'a> CabinetService<'a> {
    /// Create a new cabinet service over `store`
    pub fn new(store: &'a mut RecordStore, strategy: BaselineStrategy) -> Self {
        Self {
            store,
            strategy,
            audit: None,
        }
    }

    /// Write record changes to `logger`; `None` disables auditing
    pub fn with_audit(mut self, logger: Option<&'a AuditLogger>) -> Self {
        self.audit = logger;
        self
    }

    /// Reconcile a validated entry and append it to the store
    ///
    /// Daily revenue is computed against the records present before the
    /// insert. Undated entries are dated `today`.
    pub fn create(&mut self, entry: CabinetEntry, today: NaiveDate) -> CabinetResult<CabinetRecord> {
        let daily_revenue = self.preview_daily_revenue(&entry.cabinet_label, entry.total_revenue);
        let date = entry.date.unwrap_or(today);
        let record = CabinetRecord::from_entry(entry, daily_revenue, date);

        self.store.add(record.clone());

        if let Some(logger) = self.audit {
            logger.log(&AuditEntry::create(
                record.id.to_string(),
                Some(record.to_string()),
                &record,
            ))?;
        }

        Ok(record)
    }

    /// Daily revenue a new entry would get, without inserting it
    pub fn preview_daily_revenue(&self, cabinet_label: &str, total_revenue: Money) -> Money {
        compute_daily_revenue_with(self.strategy, cabinet_label, total_revenue, self.store.list())
    }

    /// The record a new entry for `cabinet_label` would be measured against
    pub fn baseline(&self, cabinet_label: &str) -> Option<&CabinetRecord> {
        find_baseline(self.strategy, cabinet_label, self.store.list())
    }

    /// Replace the record with `id` by a direct edit
    ///
    /// No reconciliation happens: every field, daily revenue included, is
    /// taken as given. Returns `Ok(false)` and changes nothing when no record
    /// has that id.
    pub fn update(&mut self, id: RecordId, record: CabinetRecord) -> CabinetResult<bool> {
        let Some(before) = self.store.get(id).cloned() else {
            return Ok(false);
        };

        record.validate()?;

        self.store.update(id, record);

        if let (Some(logger), Some(after)) = (self.audit, self.store.get(id)) {
            let before_json = serde_json::to_value(&before)?;
            let after_json = serde_json::to_value(after)?;
            logger.log(&AuditEntry::update(
                id.to_string(),
                Some(after.to_string()),
                &before,
                after,
                generate_diff(&before_json, &after_json),
            ))?;
        }

        Ok(true)
    }

    /// Delete the record with `id`, returning it
    ///
    /// Unknown ids are a no-op returning `Ok(None)`.
    pub fn remove(&mut self, id: RecordId) -> CabinetResult<Option<CabinetRecord>> {
        let removed = self.store.remove(id);

        if let (Some(logger), Some(record)) = (self.audit, removed.as_ref()) {
            logger.log(&AuditEntry::delete(
                id.to_string(),
                Some(record.to_string()),
                record,
            ))?;
        }

        Ok(removed)
    }

    /// All records in display order
    pub fn list(&self) -> &[CabinetRecord] {
        self.store.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::models::CabinetDraft;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn entry(label: &str, total: &str) -> CabinetEntry {
        CabinetDraft {
            last_name: "Ivanov".into(),
            first_name: "Petr".into(),
            cabinet: label.into(),
            total_revenue: total.into(),
            daily_revenue: None,
            balance: "45000".into(),
            deals_before_midnight: "12".into(),
            deals_after_midnight: "8".into(),
            date: None,
        }
        .parse()
        .unwrap()
    }

    #[test]
    fn test_create_reconciles_and_stores() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());

        let first = service.create(entry("A", "100"), today()).unwrap();
        assert_eq!(first.daily_revenue, Money::from_major(100));
        assert_eq!(first.date, today());

        let second = service.create(entry("A", "150"), today()).unwrap();
        assert_eq!(second.daily_revenue, Money::from_major(50));

        let third = service.create(entry("A", "80"), today()).unwrap();
        assert_eq!(third.daily_revenue, Money::from_major(-20));

        assert_eq!(service.list().len(), 3);
        assert_eq!(service.list()[1], second);
    }

    #[test]
    fn test_added_record_listed_exactly_once() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let record = service.create(entry("B", "220000"), today()).unwrap();

        let matching: Vec<_> = store.iter().filter(|r| r.id == record.id).collect();
        assert_eq!(matching, vec![&record]);
    }

    #[test]
    fn test_strategy_is_applied() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::MostRecentByDate);
        service.create(entry("A", "100"), today()).unwrap();
        let later = today().succ_opt().unwrap();
        service.create(entry("A", "130"), later).unwrap();

        assert_eq!(
            service.preview_daily_revenue("A", Money::from_major(150)),
            Money::from_major(20)
        );
        assert_eq!(service.baseline("A").unwrap().date, later);
        assert!(service.baseline("Z").is_none());
    }

    #[test]
    fn test_update_is_direct_edit() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let original = service.create(entry("A", "100"), today()).unwrap();

        let mut edited = original.clone();
        edited.total_revenue = Money::from_major(500);
        assert!(service.update(original.id, edited).unwrap());

        let stored = &service.list()[0];
        assert_eq!(stored.total_revenue, Money::from_major(500));
        // Not recomputed
        assert_eq!(stored.daily_revenue, Money::from_major(100));
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let original = service.create(entry("A", "100"), today()).unwrap();
        let before = service.list().to_vec();

        let mut other = original.clone();
        other.last_name = "Sidorov".into();
        assert!(!service.update(RecordId::new(), other).unwrap());
        assert_eq!(service.list(), before.as_slice());
    }

    #[test]
    fn test_update_unknown_id_skips_validation() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let original = service.create(entry("A", "100"), today()).unwrap();
        let before = service.list().to_vec();

        let mut invalid = original.clone();
        invalid.cabinet_label = String::new();
        assert!(!service.update(RecordId::new(), invalid).unwrap());
        assert_eq!(service.list(), before.as_slice());
    }

    #[test]
    fn test_update_rejects_invalid_record() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let original = service.create(entry("A", "100"), today()).unwrap();

        let mut edited = original.clone();
        edited.cabinet_label = String::new();
        let err = service.update(original.id, edited).unwrap_err();
        assert_eq!(err.field(), Some("cabinet"));
        assert_eq!(service.list()[0], original);
    }

    #[test]
    fn test_remove() {
        let mut store = RecordStore::new();
        let mut service = CabinetService::new(&mut store, BaselineStrategy::default());
        let a = service.create(entry("A", "1"), today()).unwrap();
        let b = service.create(entry("B", "2"), today()).unwrap();
        let c = service.create(entry("C", "3"), today()).unwrap();

        assert_eq!(service.remove(b.id).unwrap(), Some(b));
        assert_eq!(service.remove(RecordId::new()).unwrap(), None);

        let ids: Vec<_> = service.list().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![a.id, c.id]);
    }

    #[test]
    fn test_changes_are_audited() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let mut store = RecordStore::new();
        let mut service =
            CabinetService::new(&mut store, BaselineStrategy::default()).with_audit(Some(&logger));

        let record = service.create(entry("A", "100"), today()).unwrap();
        let mut edited = record.clone();
        edited.balance = Money::from_major(50_000);
        service.update(record.id, edited).unwrap();
        service.remove(record.id).unwrap();
        // No-ops leave no trace
        service.remove(record.id).unwrap();

        let entries = logger.read_all().unwrap();
        let ops: Vec<_> = entries.iter().map(|e| e.operation).collect();
        assert_eq!(ops, vec![Operation::Create, Operation::Update, Operation::Delete]);
        assert_eq!(
            entries[1].diff_summary.as_deref(),
            Some("balance: 45 000.00 -> 50 000.00")
        );
        assert!(entries.iter().all(|e| e.entity_id == record.id.to_string()));
    }
}
