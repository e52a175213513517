// Wiring shared by every command
use crate::auth::{self, IdentityGate};
use crate::history::{HistoryStore, JsonlHistoryStore};
use crate::models::Settings;
use crate::pipeline::LookupPipeline;
use crate::source::{self, ProfileSource};
use crate::utils::get_history_jsonl_path;
use log::info;
use std::sync::Arc;

pub struct AppState {
    pub settings: Settings,
    pub pipeline: LookupPipeline,
    pub gate: Arc<dyn IdentityGate>,
}

impl AppState {
    /// Builds the source and gate named in `settings` around an existing store
    pub fn new(settings: Settings, history: Arc<dyn HistoryStore>) -> Result<Self, String> {
        let source = source::from_settings(&settings)?;
        let state = Self::with_parts(settings, source, history);
        info!("Using {} profile source", state.pipeline.source_name());
        Ok(state)
    }

    pub fn with_parts(
        settings: Settings,
        source: Arc<dyn ProfileSource>,
        history: Arc<dyn HistoryStore>,
    ) -> Self {
        let gate = auth::from_settings(&settings);
        Self {
            pipeline: LookupPipeline::new(source, history),
            gate,
            settings,
        }
    }

    /// Opens the history table in the app data dir
    pub fn open_default(settings: Settings) -> Result<Self, String> {
        let path = get_history_jsonl_path();
        let store = JsonlHistoryStore::open(&path)
            .map_err(|e| format!("Failed to open history at {:?}: {}", path, e))?;
        info!("History table at {:?}", store.path());
        Self::new(settings, Arc::new(store))
    }
}
