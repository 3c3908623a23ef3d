//! Session state for the signed-in user and credential.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionManager` is the single writer of both the in-memory session and
//! its persisted localStorage record. Route guards and pages observe through
//! `SessionReader`; mutation happens only via the manager's operations.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::util::storage;

/// localStorage key holding the raw bearer token.
pub const TOKEN_STORAGE_KEY: &str = "ordinal_token";
/// localStorage key holding the JSON-serialized user.
pub const USER_STORAGE_KEY: &str = "ordinal_user";

/// The current session: who is signed in, with what credential.
///
/// `user` and `token` are always both present or both absent. `loading` is
/// true only between process start and the first restore from storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, token: None, loading: true }
    }
}

impl SessionState {
    /// Empty session after a restore, a logout, or a credential failure.
    pub fn signed_out() -> Self {
        Self { user: None, token: None, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Rebuild session state from the raw persisted record.
///
/// A partial or corrupt record (missing token, missing user, empty token, or
/// a user entry that does not parse as a `User` — including the literal
/// `"undefined"` some storage paths leave behind) restores as an empty
/// session rather than an error.
pub(crate) fn restore_from_record(token: Option<String>, user_raw: Option<String>) -> SessionState {
    let (Some(token), Some(user_raw)) = (token, user_raw) else {
        return SessionState::signed_out();
    };
    if token.is_empty() {
        return SessionState::signed_out();
    }
    let Ok(user) = serde_json::from_str::<User>(&user_raw) else {
        return SessionState::signed_out();
    };
    SessionState { user: Some(user), token: Some(token), loading: false }
}

/// Owns the session signal and the persisted record. Cheap to copy; hand the
/// manager only to code that may mutate the session, and a [`SessionReader`]
/// to everything else.
#[derive(Clone, Copy)]
pub struct SessionManager {
    state: RwSignal<SessionState>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self { state: RwSignal::new(SessionState::default()) }
    }

    /// Read-only handle for observers (route guard, display code).
    pub fn reader(self) -> SessionReader {
        SessionReader(self.state.read_only())
    }

    /// Restore the session from storage. Runs once at application start and
    /// always resolves `loading`, whether or not a record was found.
    pub fn initialize(self) {
        let token = storage::get_item(TOKEN_STORAGE_KEY);
        let user_raw = storage::get_item(USER_STORAGE_KEY);
        self.state.set(restore_from_record(token, user_raw));
    }

    /// Record a successful login or registration: persist the record, then
    /// publish the new state. Observers see the update synchronously.
    pub fn login(self, user: User, token: String) {
        storage::set_item(TOKEN_STORAGE_KEY, &token);
        if let Ok(raw) = serde_json::to_string(&user) {
            storage::set_item(USER_STORAGE_KEY, &raw);
        }
        self.state.set(SessionState { user: Some(user), token: Some(token), loading: false });
    }

    /// Clear the session and delete the persisted record. Idempotent.
    pub fn logout(self) {
        storage::remove_item(TOKEN_STORAGE_KEY);
        storage::remove_item(USER_STORAGE_KEY);
        self.state.set(SessionState::signed_out());
    }

    /// Current bearer token, if signed in. Untracked: request code reads the
    /// credential at call time rather than subscribing to it.
    pub fn token(self) -> Option<String> {
        self.state.get_untracked().token
    }

    /// Untracked snapshot of the current session.
    pub fn snapshot(self) -> SessionState {
        self.state.get_untracked()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the session, provided through context to every page and
/// component that only needs to observe.
#[derive(Clone, Copy)]
pub struct SessionReader(ReadSignal<SessionState>);

impl SessionReader {
    /// Reactive read; subscribes the caller to session changes.
    pub fn get(self) -> SessionState {
        self.0.get()
    }

    pub fn get_untracked(self) -> SessionState {
        self.0.get_untracked()
    }
}
