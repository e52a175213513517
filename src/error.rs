// Lookup and persistence error taxonomy
use thiserror::Error;

/// Failures that end a lookup before anything is recorded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Invalid UID format: {reason}")]
    InvalidIdentifier { reason: String },

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Profile source unavailable: {reason}")]
    SourceUnavailable { reason: String },
}

impl LookupError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        LookupError::InvalidIdentifier {
            reason: reason.into(),
        }
    }

    pub(crate) fn unavailable(reason: impl Into<String>) -> Self {
        LookupError::SourceUnavailable {
            reason: reason.into(),
        }
    }

    /// Stable tag for the frontend
    pub fn kind(&self) -> &'static str {
        match self {
            LookupError::InvalidIdentifier { .. } => "invalid_identifier",
            LookupError::UnknownRegion(_) => "unknown_region",
            LookupError::SourceUnavailable { .. } => "source_unavailable",
        }
    }

    /// Message shown to the player searching
    pub fn user_message(&self) -> String {
        match self {
            LookupError::InvalidIdentifier { .. } => {
                "Invalid UID format. A UID has at least 8 characters.".to_string()
            }
            LookupError::UnknownRegion(region) => format!("Unknown region \"{}\".", region),
            LookupError::SourceUnavailable { .. } => {
                "Could not reach the player servers. Please search again in a moment.".to_string()
            }
        }
    }
}

/// Failures of the history store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("History store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("History store unavailable: {0}")]
    Unavailable(String),
}
