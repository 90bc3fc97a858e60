//! In-memory record store
//!
//! Holds the ordered collection of cabinet records for one session. Insertion
//! order is display order; nothing here sorts. Records are never written to
//! disk.

use crate::models::{CabinetRecord, RecordId};

/// Ordered, in-memory collection of cabinet records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<CabinetRecord>,
}

impl RecordStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order
    pub fn with_records(records: Vec<CabinetRecord>) -> Self {
        Self { records }
    }

    /// Append a record
    ///
    /// The id is assigned by the caller and must not collide with a stored
    /// one; a collision is a caller error and is not handled here.
    pub fn add(&mut self, record: CabinetRecord) {
        debug_assert!(
            self.get(record.id).is_none(),
            "duplicate record id {}",
            record.id
        );
        self.records.push(record);
    }

    /// Replace the record with `id` wholesale, keeping the stored id
    ///
    /// Unknown ids are a benign no-op: nothing changes and `false` is
    /// returned. Callers only update records they are displaying.
    pub fn update(&mut self, id: RecordId, mut record: CabinetRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(slot) => {
                record.id = id;
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Delete the record with `id`, returning it
    ///
    /// Unknown ids are a benign no-op returning `None`. The relative order of
    /// the remaining records is preserved.
    pub fn remove(&mut self, id: RecordId) -> Option<CabinetRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// All records in insertion order
    pub fn list(&self) -> &[CabinetRecord] {
        &self.records
    }

    /// Look up a record by id
    pub fn get(&self, id: RecordId) -> Option<&CabinetRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, CabinetRecord> {
        self.records.iter()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a CabinetRecord;
    type IntoIter = std::slice::Iter<'a, CabinetRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn record(label: &str, total: i64) -> CabinetRecord {
        CabinetRecord {
            id: RecordId::new(),
            last_name: "Ivanov".into(),
            first_name: "Petr".into(),
            cabinet_label: label.into(),
            total_revenue: Money::from_major(total),
            daily_revenue: Money::zero(),
            balance: Money::from_major(1000),
            deals_before_midnight: 1,
            deals_after_midnight: 2,
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        }
    }

    fn ids(store: &RecordStore) -> Vec<RecordId> {
        store.list().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut store = RecordStore::new();
        let (a, b, c) = (record("C", 3), record("A", 1), record("B", 2));
        let expected = vec![a.id, b.id, c.id];

        store.add(a);
        store.add(b);
        store.add(c);

        assert_eq!(ids(&store), expected);
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = RecordStore::new();
        let mut r = record("A", 150_000);
        r.daily_revenue = Money::from_major(5000);
        store.add(r.clone());

        let matching: Vec<_> = store.list().iter().filter(|x| x.id == r.id).collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0], &r);
    }

    #[test]
    fn test_remove_excludes_only_that_id() {
        let mut store = RecordStore::new();
        let (a, b, c) = (record("A", 1), record("B", 2), record("C", 3));
        let (a_id, b_id, c_id) = (a.id, b.id, c.id);
        store.add(a);
        store.add(b);
        store.add(c);

        let removed = store.remove(b_id).unwrap();
        assert_eq!(removed.cabinet_label, "B");
        assert_eq!(ids(&store), vec![a_id, c_id]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = RecordStore::new();
        store.add(record("A", 1));
        let before = store.clone();

        assert!(store.remove(RecordId::new()).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_replaces_wholesale() {
        let mut store = RecordStore::new();
        let a = record("A", 100);
        let a_id = a.id;
        store.add(a);
        store.add(record("B", 200));

        let mut edited = record("A2", 175);
        edited.balance = Money::from_major(7);
        assert!(store.update(a_id, edited));

        let stored = store.get(a_id).unwrap();
        assert_eq!(stored.cabinet_label, "A2");
        assert_eq!(stored.total_revenue, Money::from_major(175));
        assert_eq!(stored.balance, Money::from_major(7));
        // position is kept
        assert_eq!(store.list()[0].id, a_id);
    }

    #[test]
    fn test_update_unknown_is_noop() {
        let mut store = RecordStore::new();
        store.add(record("A", 1));
        store.add(record("B", 2));
        let before = store.clone();

        assert!(!store.update(RecordId::new(), record("Z", 999)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_get_and_iter() {
        let a = record("A", 1);
        let a_id = a.id;
        let store = RecordStore::with_records(vec![a, record("B", 2)]);

        assert_eq!(store.get(a_id).unwrap().cabinet_label, "A");
        assert!(store.get(RecordId::new()).is_none());
        let labels: Vec<_> = (&store).into_iter().map(|r| r.cabinet_label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B"]);
    }
}
