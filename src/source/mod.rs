//! Profile sources.
//!
//! A source turns `(identifier, region)` into a [`ProfileRecord`] or a
//! [`LookupError`]. The live and mock implementations share the same
//! identifier rule, checked before any network or RNG work happens.

mod live;
mod mock;

pub use live::LiveProfileSource;
pub use mock::MockProfileSource;

use crate::error::LookupError;
use crate::models::{ProfileRecord, Region, Settings, SourceMode};
use std::sync::Arc;
use std::time::Duration;

/// Shortest identifier the upstream provider accepts
pub const MIN_IDENTIFIER_LEN: usize = 8;

pub trait ProfileSource: Send + Sync {
    /// Single attempt, no retries
    fn fetch(&self, identifier: &str, region: Region) -> Result<ProfileRecord, LookupError>;

    fn name(&self) -> &'static str;
}

pub fn validate_identifier(identifier: &str) -> Result<(), LookupError> {
    let len = identifier.chars().count();
    if len < MIN_IDENTIFIER_LEN {
        return Err(LookupError::invalid(format!(
            "expected at least {} characters, got {}",
            MIN_IDENTIFIER_LEN, len
        )));
    }
    Ok(())
}

/// Builds the source selected by `source_mode`
pub fn from_settings(settings: &Settings) -> Result<Arc<dyn ProfileSource>, String> {
    match settings.source_mode {
        SourceMode::Live => {
            let source = LiveProfileSource::new(
                &settings.live_endpoint,
                Duration::from_secs(settings.request_timeout_secs),
            )?;
            Ok(Arc::new(source))
        }
        SourceMode::Mock => Ok(Arc::new(MockProfileSource::with_latency(Duration::from_millis(
            settings.mock_latency_ms,
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_length_rule() {
        assert!(validate_identifier("12345678").is_ok());
        assert!(validate_identifier("123456789").is_ok());
        assert!(matches!(
            validate_identifier("1234567"),
            Err(LookupError::InvalidIdentifier { .. })
        ));
        assert!(validate_identifier("").is_err());
    }

    #[test]
    fn test_from_settings_picks_configured_source() {
        let mut settings = Settings::default();
        assert_eq!(from_settings(&settings).unwrap().name(), "mock");

        settings.source_mode = SourceMode::Live;
        assert_eq!(from_settings(&settings).unwrap().name(), "live");

        settings.live_endpoint = "not a url".to_string();
        assert!(from_settings(&settings).is_err());
    }
}
