use crate::{CoreError, SignInState};

#[test]
fn given_happy_path_when_transitioning_then_each_step_allowed() {
    let state = SignInState::Idle
        .transition(SignInState::Authenticating)
        .and_then(|s| s.transition(SignInState::AuthSucceeded))
        .and_then(|s| s.transition(SignInState::Reconciling))
        .and_then(|s| s.transition(SignInState::SessionActive));

    assert_eq!(state.unwrap(), SignInState::SessionActive);
}

#[test]
fn given_failed_auth_when_transitioning_then_returns_to_idle() {
    let state = SignInState::Authenticating
        .transition(SignInState::AuthFailed)
        .and_then(|s| s.transition(SignInState::Idle));

    assert_eq!(state.unwrap(), SignInState::Idle);
}

#[test]
fn given_session_active_when_moving_back_to_reconciling_then_rejected() {
    let result = SignInState::SessionActive.transition(SignInState::Reconciling);

    assert!(matches!(
        result,
        Err(CoreError::IllegalTransition {
            from: "session_active",
            to: "reconciling",
            ..
        })
    ));
}

#[test]
fn given_idle_when_skipping_authentication_then_rejected() {
    assert!(!SignInState::Idle.can_transition_to(SignInState::SessionActive));
    assert!(!SignInState::Idle.can_transition_to(SignInState::Idle));
}

#[test]
fn test_sign_in_state_default() {
    assert_eq!(SignInState::default(), SignInState::Idle);
}
