//! Append-only search history.
//!
//! Rows are partitioned by the caller's verified identity through the read
//! predicate only; every read filters on a [`VerifiedIdentity`], so a caller
//! can never ask for another caller's rows by name.

mod jsonl;
mod memory;

pub use jsonl::JsonlHistoryStore;
pub use memory::MemoryHistoryStore;

use crate::error::StoreError;
use crate::models::{HistoryEntry, VerifiedIdentity};

pub trait HistoryStore: Send + Sync {
    /// Inserts one row. Existing rows are never touched.
    fn append(&self, entry: &HistoryEntry) -> Result<(), StoreError>;

    /// Rows authored by `identity`, newest first
    fn list_for(&self, identity: &VerifiedIdentity) -> Result<Vec<HistoryEntry>, StoreError>;
}

/// Keeps `identity`'s rows and orders them newest first. Rows sharing a
/// timestamp keep reverse insertion order.
pub(crate) fn newest_first_for(rows: Vec<HistoryEntry>, identity: &VerifiedIdentity) -> Vec<HistoryEntry> {
    let mut mine: Vec<HistoryEntry> = rows
        .into_iter()
        .rev()
        .filter(|row| row.identity == identity.as_str())
        .collect();
    mine.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    mine
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn row(identity: &str, uid: &str, minute: u32) -> HistoryEntry {
        HistoryEntry {
            id: uid.to_string(),
            identity: identity.to_string(),
            queried_identifier: uid.to_string(),
            resolved_nickname: format!("BD_Sniper_{}", uid),
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 10, minute, 0).unwrap(),
            is_real_data: false,
        }
    }

    #[test]
    fn test_newest_first_filters_and_orders() {
        let me = VerifiedIdentity::new("me@example.com");
        let rows = vec![
            row("me@example.com", "a", 1),
            row("other@example.com", "b", 5),
            row("me@example.com", "c", 9),
            row("me@example.com", "d", 3),
        ];

        let mine = newest_first_for(rows, &me);
        let uids: Vec<&str> = mine.iter().map(|r| r.queried_identifier.as_str()).collect();
        assert_eq!(uids, vec!["c", "d", "a"]);
    }

    #[test]
    fn test_equal_timestamps_latest_insert_first() {
        let me = VerifiedIdentity::new("me@example.com");
        let mut first = row("me@example.com", "first", 0);
        let mut second = row("me@example.com", "second", 0);
        let ts = Utc::now();
        first.timestamp = ts;
        second.timestamp = ts;

        let mine = newest_first_for(vec![first, second], &me);
        assert_eq!(mine[0].queried_identifier, "second");

        let older = ts - Duration::seconds(1);
        let mut third = row("me@example.com", "third", 0);
        third.timestamp = older;
        let mine = newest_first_for(vec![third, mine[1].clone(), mine[0].clone()], &me);
        assert_eq!(mine.last().unwrap().queried_identifier, "third");
    }
}
