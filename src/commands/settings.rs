// Settings command handlers - file storage with partial updates
use crate::file_manager::{read_json_file_or_default, write_json_file};
use crate::models::{AuthSettings, Region, Settings, SourceMode};
use crate::utils::get_settings_json_path;
use log::debug;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
pub struct UpdateSettingsParams {
    pub source_mode: Option<SourceMode>,
    pub live_endpoint: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub default_region: Option<String>,
    pub mock_latency_ms: Option<u64>,
    /// 0 clears the limit
    pub history_limit: Option<u32>,
    /// Empty list turns sign-in off (demo mode)
    pub allowed_emails: Option<Vec<String>>,
}

/// Get current settings from the JSON file
pub fn get_settings() -> Result<Settings, String> {
    load_settings_from(&get_settings_json_path())
}

pub fn load_settings_from(path: &Path) -> Result<Settings, String> {
    read_json_file_or_default(path)
}

/// Update settings with partial update support
pub fn update_settings(params: UpdateSettingsParams) -> Result<Settings, String> {
    update_settings_at(&get_settings_json_path(), params)
}

pub fn update_settings_at(path: &Path, params: UpdateSettingsParams) -> Result<Settings, String> {
    let mut current_settings = load_settings_from(path)?;

    if let Some(source_mode) = params.source_mode {
        current_settings.source_mode = source_mode;
    }
    if let Some(live_endpoint) = params.live_endpoint {
        url::Url::parse(&live_endpoint)
            .map_err(|e| format!("Invalid live endpoint {}: {}", live_endpoint, e))?;
        current_settings.live_endpoint = live_endpoint;
    }
    if let Some(request_timeout_secs) = params.request_timeout_secs {
        if request_timeout_secs == 0 {
            return Err("Request timeout must be at least 1 second".to_string());
        }
        current_settings.request_timeout_secs = request_timeout_secs;
    }
    if let Some(default_region) = params.default_region {
        current_settings.default_region = default_region.parse::<Region>()?;
    }
    if let Some(mock_latency_ms) = params.mock_latency_ms {
        current_settings.mock_latency_ms = mock_latency_ms;
    }
    if let Some(history_limit) = params.history_limit {
        current_settings.history_limit = if history_limit == 0 {
            None
        } else {
            Some(history_limit)
        };
    }
    if let Some(allowed_emails) = params.allowed_emails {
        current_settings.auth = if allowed_emails.is_empty() {
            None
        } else {
            Some(AuthSettings { allowed_emails })
        };
    }

    write_json_file(path, &current_settings)?;

    debug!("Updated settings: {:?}", current_settings);

    Ok(current_settings)
}
