use crate::domain::ports::RecordStore;
use crate::domain::record::{ParticipantRecord, StudentId};
use crate::error::Result;
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::HashMap;
use std::sync::Arc;

/// An in-memory record store, filled once and read-only afterwards.
///
/// Cloning shares the same underlying map. Since nothing writes to it after
/// construction, readers need no lock.
#[derive(Default, Clone)]
pub struct InMemoryRecordStore {
    records: Arc<Vec<ParticipantRecord>>,
    index: Arc<HashMap<StudentId, usize>>,
}

impl InMemoryRecordStore {
    /// Indexes `records` by student id. The first record wins when an id
    /// appears more than once.
    pub fn new(records: Vec<ParticipantRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (pos, record) in records.iter().enumerate() {
            if let Some(first) = index.get(&record.student_id) {
                warn!(
                    "duplicate student id {} at record {} (keeping record {})",
                    record.student_id, pos, first
                );
                continue;
            }
            index.insert(record.student_id.clone(), pos);
        }
        debug!(
            "indexed {} records under {} distinct ids",
            records.len(),
            index.len()
        );
        Self {
            records: Arc::new(records),
            index: Arc::new(index),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn find(&self, student_id: &StudentId) -> Result<Option<ParticipantRecord>> {
        Ok(self
            .index
            .get(student_id)
            .and_then(|pos| self.records.get(*pos))
            .cloned())
    }

    async fn all(&self) -> Result<Vec<ParticipantRecord>> {
        Ok(self.records.as_ref().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(id: &str, name: &str) -> ParticipantRecord {
        ParticipantRecord::new(StudentId::parse(id).unwrap(), name)
    }

    #[tokio::test]
    async fn test_in_memory_record_store() {
        let mut first = record("25B00001", "Sato");
        first.shift_hours = dec!(2);
        let store = InMemoryRecordStore::new(vec![first.clone(), record("25B00002", "Suzuki")]);

        let found = store
            .find(&StudentId::parse("25b00001").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, first);

        assert!(
            store
                .find(&StudentId::parse("25B99999").unwrap())
                .await
                .unwrap()
                .is_none()
        );
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicates_first_match_wins() {
        let store = InMemoryRecordStore::new(vec![
            record("25B00001", "First"),
            record("25B00001", "Second"),
        ]);

        let found = store
            .find(&StudentId::parse("25B00001").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.name, "First");
        // Duplicates are still part of the full listing.
        assert_eq!(store.all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InMemoryRecordStore::new(vec![record("25B00001", "Sato")]);
        let other = store.clone();
        assert!(
            other
                .find(&StudentId::parse("25B00001").unwrap())
                .await
                .unwrap()
                .is_some()
        );
        assert!(InMemoryRecordStore::default().is_empty());
    }
}
