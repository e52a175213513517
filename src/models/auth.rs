// Caller identity models
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_NAME: &str = "Demo User";

/// E-mail address that passed the identity gate.
///
/// Only gates can mint one, so history reads are always keyed on a value the
/// gate vouched for rather than on a client-supplied string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VerifiedIdentity(String);

impl VerifiedIdentity {
    pub(crate) fn new(email: &str) -> Self {
        Self(normalize_email(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerifiedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// Outcome of running a caller through the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allowed {
        identity: VerifiedIdentity,
        display_name: String,
        is_demo: bool,
    },
    Unauthenticated,
    Denied {
        email: String,
        reason: String,
    },
}

/// Authentication status for the frontend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatus {
    pub is_authenticated: bool,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub is_demo: bool,
    pub denied_reason: Option<String>,
}

impl From<&GateDecision> for AuthStatus {
    fn from(decision: &GateDecision) -> Self {
        match decision {
            GateDecision::Allowed {
                identity,
                display_name,
                is_demo,
            } => AuthStatus {
                is_authenticated: true,
                email: Some(identity.to_string()),
                display_name: Some(display_name.clone()),
                is_demo: *is_demo,
                denied_reason: None,
            },
            GateDecision::Unauthenticated => AuthStatus {
                is_authenticated: false,
                email: None,
                display_name: None,
                is_demo: false,
                denied_reason: Some("Please sign in to access the player database".to_string()),
            },
            GateDecision::Denied { email, reason } => AuthStatus {
                is_authenticated: false,
                email: Some(email.clone()),
                display_name: None,
                is_demo: false,
                denied_reason: Some(reason.clone()),
            },
        }
    }
}
