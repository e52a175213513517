// Player search command
use crate::error::LookupError;
use crate::models::{ProfileRecord, Region, VerifiedIdentity};
use crate::state::AppState;
use serde::Serialize;

/// Either a card to render or a message to show in its place
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Found {
        profile: ProfileRecord,
        /// Set when the lookup worked but history could not be saved
        warning: Option<String>,
    },
    Failed {
        kind: String,
        message: String,
    },
}

impl From<LookupError> for SearchResponse {
    fn from(e: LookupError) -> Self {
        SearchResponse::Failed {
            kind: e.kind().to_string(),
            message: e.user_message(),
        }
    }
}

fn resolve_region(state: &AppState, region: Option<&str>) -> Result<Region, LookupError> {
    match region {
        None => Ok(state.settings.default_region),
        Some(label) if label.trim().is_empty() => Ok(state.settings.default_region),
        Some(label) => label
            .parse::<Region>()
            .map_err(|_| LookupError::UnknownRegion(label.trim().to_string())),
    }
}

pub fn search_player(
    state: &AppState,
    identity: &VerifiedIdentity,
    uid: &str,
    region: Option<&str>,
) -> SearchResponse {
    let region = match resolve_region(state, region) {
        Ok(region) => region,
        Err(e) => return e.into(),
    };

    match state.pipeline.lookup(identity, uid, region) {
        Ok(outcome) => SearchResponse::Found {
            profile: outcome.profile,
            warning: outcome
                .record_error
                .map(|e| format!("Search history could not be saved: {}", e)),
        },
        Err(e) => e.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryHistoryStore;
    use crate::models::Settings;
    use crate::source::MockProfileSource;
    use std::sync::Arc;

    fn state() -> (AppState, Arc<MemoryHistoryStore>) {
        let store = Arc::new(MemoryHistoryStore::new());
        let state = AppState::with_parts(
            Settings::default(),
            Arc::new(MockProfileSource::seeded(11)),
            store.clone(),
        );
        (state, store)
    }

    #[test]
    fn test_found_response_uses_default_region() {
        let (state, store) = state();
        let me = VerifiedIdentity::new("me@example.com");

        match search_player(&state, &me, "123456789", None) {
            SearchResponse::Found { profile, warning } => {
                assert_eq!(profile.region, Region::Bd);
                assert_eq!(profile.identifier, "123456789");
                assert!(warning.is_none());
            }
            other => panic!("expected Found, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_invalid_uid_message() {
        let (state, store) = state();
        let me = VerifiedIdentity::new("me@example.com");

        match search_player(&state, &me, "123", Some("BD")) {
            SearchResponse::Failed { kind, message } => {
                assert_eq!(kind, "invalid_identifier");
                assert!(message.contains("Invalid UID"));
            }
            other => panic!("expected Failed, got {:?}", other),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_region_is_rejected_before_lookup() {
        let (state, store) = state();
        let me = VerifiedIdentity::new("me@example.com");

        let response = search_player(&state, &me, "123456789", Some("narnia"));
        assert!(matches!(response, SearchResponse::Failed { ref kind, .. } if kind == "unknown_region"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_response_json_shape() {
        let (state, _store) = state();
        let me = VerifiedIdentity::new("me@example.com");

        let json = serde_json::to_value(search_player(&state, &me, "123456789", Some("ind"))).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["profile"]["region"], "IND");
        assert_eq!(json["profile"]["is_real_data"], false);
    }
}
