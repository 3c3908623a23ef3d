use super::*;

fn make_user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "alice@example.com".to_owned(),
        username: Some("alice".to_owned()),
    }
}

fn user_json() -> String {
    serde_json::to_string(&make_user()).unwrap()
}

// =============================================================
// SessionState
// =============================================================

#[test]
fn session_starts_loading_with_no_identity() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(state.token.is_none());
}

#[test]
fn signed_out_is_resolved_and_empty() {
    let state = SessionState::signed_out();
    assert!(!state.loading);
    assert!(!state.is_authenticated());
    assert!(state.token.is_none());
}

// =============================================================
// restore_from_record
// =============================================================

#[test]
fn restore_valid_record_yields_identical_session() {
    let state = restore_from_record(Some("tok-1".to_owned()), Some(user_json()));
    assert_eq!(state.user, Some(make_user()));
    assert_eq!(state.token.as_deref(), Some("tok-1"));
    assert!(!state.loading);
}

#[test]
fn restore_token_without_user_yields_empty_session() {
    let state = restore_from_record(Some("tok-1".to_owned()), None);
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn restore_user_without_token_yields_empty_session() {
    let state = restore_from_record(None, Some(user_json()));
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn restore_empty_token_yields_empty_session() {
    let state = restore_from_record(Some(String::new()), Some(user_json()));
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn restore_undefined_marker_yields_empty_session() {
    let state = restore_from_record(Some("tok-1".to_owned()), Some("undefined".to_owned()));
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn restore_corrupt_user_json_yields_empty_session() {
    let state = restore_from_record(Some("tok-1".to_owned()), Some("{\"_id\":".to_owned()));
    assert_eq!(state, SessionState::signed_out());
}

#[test]
fn restore_never_yields_partial_session() {
    for (token, user_raw) in [
        (Some("tok-1".to_owned()), Some("null".to_owned())),
        (Some("tok-1".to_owned()), Some("{}".to_owned())),
        (None, None),
    ] {
        let state = restore_from_record(token, user_raw);
        assert_eq!(state.user.is_some(), state.token.is_some());
        assert!(!state.loading);
    }
}

// =============================================================
// SessionManager transitions
// =============================================================

#[test]
fn login_publishes_identity_and_resolves_loading() {
    let manager = SessionManager::new();
    assert!(manager.snapshot().loading);

    manager.login(make_user(), "tok-9".to_owned());

    let state = manager.snapshot();
    assert_eq!(state.user, Some(make_user()));
    assert_eq!(state.token.as_deref(), Some("tok-9"));
    assert!(!state.loading);
    assert_eq!(manager.token().as_deref(), Some("tok-9"));
}

#[test]
fn logout_clears_identity() {
    let manager = SessionManager::new();
    manager.login(make_user(), "tok-9".to_owned());

    manager.logout();

    assert_eq!(manager.snapshot(), SessionState::signed_out());
    assert_eq!(manager.token(), None);
}

#[test]
fn logout_is_idempotent() {
    let manager = SessionManager::new();
    manager.logout();
    manager.logout();
    assert_eq!(manager.snapshot(), SessionState::signed_out());
}

#[test]
fn initialize_resolves_loading_when_no_record_exists() {
    // Native builds have no storage, which is exactly the missing-record case.
    let manager = SessionManager::new();
    manager.initialize();
    assert_eq!(manager.snapshot(), SessionState::signed_out());
}

#[test]
fn reader_observes_manager_writes() {
    let manager = SessionManager::new();
    let reader = manager.reader();

    manager.login(make_user(), "tok-9".to_owned());
    assert!(reader.get_untracked().is_authenticated());

    manager.logout();
    assert!(!reader.get_untracked().is_authenticated());
}
