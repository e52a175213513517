// Sign-in status command
use crate::auth::CallerClaim;
use crate::models::{AuthStatus, GateDecision, VerifiedIdentity};
use crate::state::AppState;

/// Get current authentication status
pub fn get_auth_status(state: &AppState, claim: Option<&CallerClaim>) -> AuthStatus {
    AuthStatus::from(&state.gate.check(claim))
}

/// Runs the gate and returns the identity to act as, or the status to show
pub fn require_identity(state: &AppState, claim: Option<&CallerClaim>) -> Result<VerifiedIdentity, AuthStatus> {
    let decision = state.gate.check(claim);
    match decision {
        GateDecision::Allowed { identity, .. } => Ok(identity),
        other => Err(AuthStatus::from(&other)),
    }
}
