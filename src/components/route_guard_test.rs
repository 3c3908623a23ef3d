use super::*;
use crate::net::types::User;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        username: None,
    }
}

#[test]
fn pending_while_session_is_restoring() {
    let state = SessionState::default();
    assert_eq!(evaluate(&state), GuardOutcome::Pending);
}

#[test]
fn redirects_once_resolved_without_user() {
    let state = SessionState::signed_out();
    assert_eq!(evaluate(&state), GuardOutcome::RedirectToLogin);
}

#[test]
fn renders_once_resolved_with_user() {
    let state = SessionState {
        user: Some(make_user()),
        token: Some("tok-1".to_owned()),
        loading: false,
    };
    assert_eq!(evaluate(&state), GuardOutcome::Render);
}

#[test]
fn loading_defers_even_when_a_user_is_present() {
    // Restore publishes user and loading atomically, but the guard must not
    // render early if it ever observes an in-between state.
    let state = SessionState {
        user: Some(make_user()),
        token: Some("tok-1".to_owned()),
        loading: true,
    };
    assert_eq!(evaluate(&state), GuardOutcome::Pending);
}
