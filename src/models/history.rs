// Search history models
use super::auth::VerifiedIdentity;
use super::profile::ProfileRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// One successful lookup. Written once, never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Verified e-mail of the caller, used as the partition key
    pub identity: String,
    pub queried_identifier: String,
    pub resolved_nickname: String,
    pub timestamp: DateTime<Utc>,
    /// Provenance of the recorded lookup: false for simulated data
    #[serde(default = "default_true")]
    pub is_real_data: bool,
}

impl HistoryEntry {
    /// Builds the entry for a lookup that just completed
    pub fn for_lookup(identity: &VerifiedIdentity, raw_input: &str, profile: &ProfileRecord) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            identity: identity.as_str().to_string(),
            queried_identifier: raw_input.to_string(),
            resolved_nickname: profile.nickname.clone(),
            timestamp: Utc::now(),
            is_real_data: profile.is_real_data,
        }
    }
}

/// Row shape handed to the history table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    pub identifier: String,
    pub nickname: String,
    pub timestamp: String,
    pub is_real_data: bool,
}

impl From<HistoryEntry> for HistoryRow {
    fn from(entry: HistoryEntry) -> Self {
        Self {
            identifier: entry.queried_identifier,
            nickname: entry.resolved_nickname,
            timestamp: entry.timestamp.to_rfc3339(),
            is_real_data: entry.is_real_data,
        }
    }
}
