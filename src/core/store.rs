//! The single source of truth for tracked transactions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Category, Identifiable, TransactionRecord};

/// Ordered newest-first list of records.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionStore {
    records: Vec<TransactionRecord>,
}

impl TransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store whose head is the first element of `records`.
    pub fn from_records(records: Vec<TransactionRecord>) -> Self {
        Self { records }
    }

    /// Demo entries shown on first launch.
    pub fn with_sample_data() -> Self {
        Self::from_records(vec![
            TransactionRecord::income("Salary Deposit", 3000.0),
            TransactionRecord::expense("Rent Payment", 1200.0, Category::Bills),
            TransactionRecord::expense("Coffee", 5.50, Category::Food),
        ])
    }

    /// Adds `record` at the head. Id uniqueness is the caller's responsibility.
    pub fn insert(&mut self, record: TransactionRecord) -> Uuid {
        let id = record.id;
        self.records.insert(0, record);
        id
    }

    /// Removes the first record with `id`; absent ids are a no-op.
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<TransactionRecord> {
        let index = self.position_of(id)?;
        Some(self.records.remove(index))
    }

    pub fn all(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn get(&self, id: Uuid) -> Option<&TransactionRecord> {
        self.position_of(id).map(|index| &self.records[index])
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, id: Uuid) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_places_record_at_head() {
        let mut store = TransactionStore::new();
        let first = store.insert(TransactionRecord::income("A", 10.0));
        let second = store.insert(TransactionRecord::income("B", 20.0));

        let ids: Vec<Uuid> = store.all().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![second, first]);
    }

    #[test]
    fn remove_missing_id_leaves_store_untouched() {
        let mut store = TransactionStore::with_sample_data();
        let before = store.clone();

        assert!(store.remove_by_id(Uuid::new_v4()).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn remove_twice_is_same_as_once() {
        let mut store = TransactionStore::with_sample_data();
        let target = store.all()[1].id;

        let removed = store.remove_by_id(target).expect("first removal");
        assert_eq!(removed.description, "Rent Payment");
        let after_first = store.clone();

        assert!(store.remove_by_id(target).is_none());
        assert_eq!(store, after_first);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn get_finds_record_by_id() {
        let store = TransactionStore::with_sample_data();
        let coffee = store.all()[2].clone();
        assert_eq!(store.get(coffee.id()), Some(&coffee));
        assert!(store.contains(coffee.id));
        assert!(store.get(Uuid::new_v4()).is_none());
    }

    #[test]
    fn sample_data_keeps_display_order() {
        let store = TransactionStore::with_sample_data();
        let names: Vec<&str> = store.all().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(names, vec!["Salary Deposit", "Rent Payment", "Coffee"]);
    }
}
