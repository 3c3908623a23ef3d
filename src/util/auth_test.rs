use super::*;
use crate::components::route_guard::{self, GuardOutcome};
use crate::net::types::User;
use crate::state::session::SessionState;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        username: None,
    }
}

fn signed_in_manager() -> SessionManager {
    let manager = SessionManager::new();
    manager.login(make_user(), "tok-1".to_owned());
    manager
}

#[test]
fn replace_navigation_replaces_history() {
    assert!(replace_navigation().replace);
}

#[test]
fn unauthorized_failure_clears_session_and_record() {
    let manager = signed_in_manager();

    let message = handle_api_error(manager, &ApiError::Unauthorized);

    assert_eq!(manager.snapshot(), SessionState::signed_out());
    assert_eq!(manager.token(), None);
    assert_eq!(message, "Your session has expired. Please sign in again.");
}

#[test]
fn unauthorized_failure_leaves_guard_redirecting_to_login() {
    // The cascade's navigation leg: once the session is cleared, every
    // guarded view resolves to a login redirect.
    let manager = signed_in_manager();
    let reader = manager.reader();
    assert_eq!(route_guard::evaluate(&reader.get_untracked()), GuardOutcome::Render);

    handle_api_error(manager, &ApiError::Unauthorized);

    assert_eq!(route_guard::evaluate(&reader.get_untracked()), GuardOutcome::RedirectToLogin);
}

#[test]
fn rejected_failure_surfaces_without_touching_session() {
    let manager = signed_in_manager();

    let message = handle_api_error(manager, &ApiError::Rejected("Card already exists".to_owned()));

    assert!(manager.snapshot().is_authenticated());
    assert_eq!(message, "Card already exists");
}

#[test]
fn transport_failure_surfaces_without_touching_session() {
    let manager = signed_in_manager();

    let message = handle_api_error(manager, &ApiError::Transport("network down".to_owned()));

    assert!(manager.snapshot().is_authenticated());
    assert_eq!(message, "network down");
}

#[test]
fn cascade_is_idempotent_across_racing_failures() {
    // Two in-flight requests can both come back 401; the second teardown
    // must be a no-op with the same end state.
    let manager = signed_in_manager();

    handle_api_error(manager, &ApiError::Unauthorized);
    handle_api_error(manager, &ApiError::Unauthorized);

    assert_eq!(manager.snapshot(), SessionState::signed_out());
}
