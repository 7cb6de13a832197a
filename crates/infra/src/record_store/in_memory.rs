use std::sync::{Mutex, PoisonError};

use super::r#trait::{Record, RecordStore, RecordStoreResult};

/// In-memory append-only record store.
///
/// Intended for tests/dev. Same first-match semantics as the file store.
#[derive(Debug)]
pub struct InMemoryRecordStore<R> {
    records: Mutex<Vec<R>>,
}

impl<R> InMemoryRecordStore<R> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<R> Default for InMemoryRecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> RecordStore<R> for InMemoryRecordStore<R> {
    fn save(&self, record: &R) -> RecordStoreResult<()> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> RecordStoreResult<Option<R>> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(records.iter().find(|r| r.name() == name).cloned())
    }

    fn records(&self) -> RecordStoreResult<Vec<R>> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}
