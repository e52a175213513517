// Search history command
use crate::models::{HistoryRow, VerifiedIdentity};
use crate::state::AppState;

/// History rows for the caller, newest first. `limit` falls back to the
/// configured default; no limit returns everything.
pub fn get_search_history(
    state: &AppState,
    identity: &VerifiedIdentity,
    limit: Option<u32>,
) -> Vec<HistoryRow> {
    let mut rows = state.pipeline.history_for(identity);

    if let Some(limit) = limit.or(state.settings.history_limit) {
        rows.truncate(limit as usize);
    }

    rows.into_iter().map(HistoryRow::from).collect()
}
