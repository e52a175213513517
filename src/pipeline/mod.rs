//! Lookup pipeline.
//!
//! One invocation walks `Idle -> Validating -> (Rejected | Fetching) ->
//! (Recording -> Done) | Failed`. Nothing survives between invocations; the
//! only shared state is the injected history store.
//!
//! History is written only after the source has returned a complete record,
//! and a failed history write never turns a found profile into an error. It
//! comes back as [`LookupOutcome::record_error`] instead.

use crate::error::{LookupError, StoreError};
use crate::history::HistoryStore;
use crate::models::{HistoryEntry, ProfileRecord, Region, VerifiedIdentity};
use crate::source::ProfileSource;
use log::{debug, info, warn};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStage {
    Idle,
    Validating,
    Rejected,
    Fetching,
    Recording,
    Done,
    Failed,
}

#[derive(Debug)]
pub struct LookupOutcome {
    pub profile: ProfileRecord,
    /// The row that was written, if the write succeeded
    pub entry: Option<HistoryEntry>,
    pub record_error: Option<StoreError>,
}

/// Result of one invocation plus the stages it passed through
#[derive(Debug)]
pub struct LookupReport {
    pub stages: Vec<LookupStage>,
    pub result: Result<LookupOutcome, LookupError>,
}

pub struct LookupPipeline {
    source: Arc<dyn ProfileSource>,
    history: Arc<dyn HistoryStore>,
}

impl LookupPipeline {
    pub fn new(source: Arc<dyn ProfileSource>, history: Arc<dyn HistoryStore>) -> Self {
        Self { source, history }
    }

    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    pub fn lookup(
        &self,
        identity: &VerifiedIdentity,
        raw_input: &str,
        region: Region,
    ) -> Result<LookupOutcome, LookupError> {
        self.run(identity, raw_input, region).result
    }

    pub fn run(&self, identity: &VerifiedIdentity, raw_input: &str, region: Region) -> LookupReport {
        let mut stages = vec![LookupStage::Idle, LookupStage::Validating];

        if raw_input.trim().is_empty() {
            stages.push(LookupStage::Rejected);
            debug!("Rejected empty UID from {}", identity);
            return LookupReport {
                stages,
                result: Err(LookupError::invalid("UID is empty")),
            };
        }

        stages.push(LookupStage::Fetching);
        let profile = match self.source.fetch(raw_input, region) {
            Ok(profile) => profile,
            Err(e) => {
                stages.push(LookupStage::Failed);
                info!("Lookup of UID {} via {} source failed: {}", raw_input, self.source.name(), e);
                return LookupReport { stages, result: Err(e) };
            }
        };

        stages.push(LookupStage::Recording);
        let entry = HistoryEntry::for_lookup(identity, raw_input, &profile);
        let (entry, record_error) = match self.history.append(&entry) {
            Ok(()) => (Some(entry), None),
            Err(e) => {
                warn!("Lookup of UID {} by {} succeeded but was not recorded: {}", raw_input, identity, e);
                (None, Some(e))
            }
        };

        stages.push(LookupStage::Done);
        info!("Resolved UID {} to {} for {}", raw_input, profile.nickname, identity);

        LookupReport {
            stages,
            result: Ok(LookupOutcome {
                profile,
                entry,
                record_error,
            }),
        }
    }

    /// Caller-visible history: an unreadable store shows as no rows
    pub fn history_for(&self, identity: &VerifiedIdentity) -> Vec<HistoryEntry> {
        match self.history.list_for(identity) {
            Ok(rows) => rows,
            Err(e) => {
                warn!("Failed to read history for {}: {}", identity, e);
                Vec::new()
            }
        }
    }
}
