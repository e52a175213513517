// History table stored as one JSON object per line
use super::{newest_first_for, HistoryStore};
use crate::error::StoreError;
use crate::file_manager::{append_json_line, initialize_json_lines_file, read_json_lines};
use crate::models::{HistoryEntry, VerifiedIdentity};
use log::debug;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};

/// File-backed history. The file is opened per operation; the lock only
/// serializes appends from this process.
pub struct JsonlHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonlHistoryStore {
    /// Opens the table, creating an empty file if absent
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        initialize_json_lines_file(&path)?;
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonlHistoryStore {
    fn append(&self, entry: &HistoryEntry) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        append_json_line(&self.path, entry)?;
        debug!("Recorded history {} for {}", entry.id, entry.identity);
        Ok(())
    }

    fn list_for(&self, identity: &VerifiedIdentity) -> Result<Vec<HistoryEntry>, StoreError> {
        let rows: Vec<HistoryEntry> = read_json_lines(&self.path)?;
        Ok(newest_first_for(rows, identity))
    }
}
