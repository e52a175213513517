// Identity gate: turns a sign-in provider's assertion into a verified identity
use crate::models::{normalize_email, AuthSettings, GateDecision, Settings, VerifiedIdentity, DEMO_EMAIL, DEMO_NAME};
use log::{info, warn};
use std::collections::HashSet;
use std::sync::Arc;

/// What the external sign-in provider says about the caller
#[derive(Debug, Clone)]
pub struct CallerClaim {
    pub email: String,
    pub name: Option<String>,
}

impl CallerClaim {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }
}

pub trait IdentityGate: Send + Sync {
    fn check(&self, claim: Option<&CallerClaim>) -> GateDecision;
}

/// Lets through provider-verified e-mails found on a static allowlist
pub struct AllowlistGate {
    allowed: HashSet<String>,
}

impl AllowlistGate {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            allowed: settings
                .allowed_emails
                .iter()
                .map(|e| normalize_email(e))
                .filter(|e| !e.is_empty())
                .collect(),
        }
    }
}

impl IdentityGate for AllowlistGate {
    fn check(&self, claim: Option<&CallerClaim>) -> GateDecision {
        let claim = match claim {
            Some(claim) if !claim.email.trim().is_empty() => claim,
            _ => return GateDecision::Unauthenticated,
        };

        let email = normalize_email(&claim.email);
        if !self.allowed.contains(&email) {
            warn!("Access denied for {}", email);
            return GateDecision::Denied {
                reason: format!("Access Denied: {} is not in the allowlist.", email),
                email,
            };
        }

        GateDecision::Allowed {
            display_name: claim.name.clone().unwrap_or_else(|| "Player".to_string()),
            identity: VerifiedIdentity::new(&email),
            is_demo: false,
        }
    }
}

/// Used when no sign-in provider is configured: every caller is the demo user
pub struct DemoGate;

impl IdentityGate for DemoGate {
    fn check(&self, _claim: Option<&CallerClaim>) -> GateDecision {
        GateDecision::Allowed {
            identity: VerifiedIdentity::new(DEMO_EMAIL),
            display_name: DEMO_NAME.to_string(),
            is_demo: true,
        }
    }
}

pub fn from_settings(settings: &Settings) -> Arc<dyn IdentityGate> {
    match &settings.auth {
        Some(auth) => {
            info!("Sign-in enabled with {} allowed e-mails", auth.allowed_emails.len());
            Arc::new(AllowlistGate::new(auth))
        }
        None => {
            info!("No sign-in provider configured, running in demo mode");
            Arc::new(DemoGate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> AllowlistGate {
        AllowlistGate::new(&AuthSettings {
            allowed_emails: vec!["Owner@Example.com".to_string(), "  ".to_string()],
        })
    }

    #[test]
    fn test_allowlisted_email_is_normalized() {
        let claim = CallerClaim {
            email: " owner@example.COM ".to_string(),
            name: Some("Owner".to_string()),
        };
        match gate().check(Some(&claim)) {
            GateDecision::Allowed {
                identity,
                display_name,
                is_demo,
            } => {
                assert_eq!(identity.as_str(), "owner@example.com");
                assert_eq!(display_name, "Owner");
                assert!(!is_demo);
            }
            other => panic!("expected Allowed, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_email_is_denied() {
        let decision = gate().check(Some(&CallerClaim::new("stranger@example.com")));
        assert!(matches!(decision, GateDecision::Denied { ref email, .. } if email == "stranger@example.com"));
    }

    #[test]
    fn test_missing_claim_is_unauthenticated() {
        assert_eq!(gate().check(None), GateDecision::Unauthenticated);
        assert_eq!(gate().check(Some(&CallerClaim::new(""))), GateDecision::Unauthenticated);
    }

    #[test]
    fn test_demo_mode_without_auth_settings() {
        let gate = from_settings(&Settings::default());
        match gate.check(Some(&CallerClaim::new("anyone@example.com"))) {
            GateDecision::Allowed { identity, is_demo, .. } => {
                assert_eq!(identity.as_str(), DEMO_EMAIL);
                assert!(is_demo);
            }
            other => panic!("expected demo identity, got {:?}", other),
        }
    }
}
