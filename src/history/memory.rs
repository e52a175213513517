// In-process history, lost on exit
use super::{newest_first_for, HistoryStore};
use crate::error::StoreError;
use crate::models::{HistoryEntry, VerifiedIdentity};
use parking_lot::Mutex;

#[derive(Default)]
pub struct MemoryHistoryStore {
    rows: Mutex<Vec<HistoryEntry>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total rows across all identities
    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&self, entry: &HistoryEntry) -> Result<(), StoreError> {
        self.rows.lock().push(entry.clone());
        Ok(())
    }

    fn list_for(&self, identity: &VerifiedIdentity) -> Result<Vec<HistoryEntry>, StoreError> {
        let rows = self.rows.lock().clone();
        Ok(newest_first_for(rows, identity))
    }
}
