use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Lifecycle of one sign-in attempt. Identical for every provider.
///
/// ```text
/// Idle -> Authenticating -> AuthSucceeded -> Reconciling -> SessionActive
///                        \-> AuthFailed -> Idle
/// ```
///
/// Reconciliation runs detached; its result never moves the machine back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SignInState {
    #[default]
    Idle,
    Authenticating,
    AuthSucceeded,
    Reconciling,
    SessionActive,
    AuthFailed,
}

impl SignInState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Authenticating => "authenticating",
            Self::AuthSucceeded => "auth_succeeded",
            Self::Reconciling => "reconciling",
            Self::SessionActive => "session_active",
            Self::AuthFailed => "auth_failed",
        }
    }

    pub fn can_transition_to(&self, next: SignInState) -> bool {
        use SignInState::*;

        matches!(
            (self, next),
            (Idle, Authenticating)
                | (Authenticating, AuthSucceeded)
                | (Authenticating, AuthFailed)
                | (AuthSucceeded, Reconciling)
                | (Reconciling, SessionActive)
                | (AuthFailed, Idle)
                // Sign-out
                | (SessionActive, Idle)
        )
    }

    /// Validated transition.
    #[track_caller]
    pub fn transition(self, next: SignInState) -> CoreErrorResult<SignInState> {
        if self.can_transition_to(next) {
            Ok(next)
        } else {
            Err(CoreError::IllegalTransition {
                from: self.as_str(),
                to: next.as_str(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Display for SignInState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
