// Settings data models
use super::profile::Region;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIVE_ENDPOINT: &str = "https://free-ff-api-url.com/api/v1/account";

/// Which profile source the app wires into the lookup pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SourceMode {
    Live,
    #[default]
    Mock,
}

/// Allowlist for the external sign-in provider
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthSettings {
    pub allowed_emails: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub source_mode: SourceMode,
    pub live_endpoint: String,
    pub request_timeout_secs: u64,
    pub default_region: Region,
    pub mock_latency_ms: u64,
    /// Rows shown by default on the history tab, None for all
    pub history_limit: Option<u32>,
    /// None runs in demo mode with a single built-in identity
    pub auth: Option<AuthSettings>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_mode: SourceMode::Mock,
            live_endpoint: String::from(DEFAULT_LIVE_ENDPOINT),
            request_timeout_secs: 3,
            default_region: Region::Bd,
            mock_latency_ms: 1000,
            history_limit: None,
            auth: None,
        }
    }
}
