//! Route guard gating protected views on session presence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every route that requires a signed-in user. The decision is pure
//! and synchronous; the only side effect is the redirect navigation.

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::{SessionReader, SessionState};

/// Outcome of evaluating the guard against the current session.
///
/// The progression is linear: `Pending` resolves exactly once per process,
/// into either of the other two outcomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Restore has not finished; render a placeholder, decide nothing.
    Pending,
    /// Resolved with no user; navigate to the login entry point.
    RedirectToLogin,
    /// Resolved with a user; render the guarded children unmodified.
    Render,
}

/// Pure guard decision over the current session.
pub fn evaluate(state: &SessionState) -> GuardOutcome {
    if state.loading {
        return GuardOutcome::Pending;
    }
    if state.user.is_none() {
        return GuardOutcome::RedirectToLogin;
    }
    GuardOutcome::Render
}

/// Renders its children only for an authenticated session. While the session
/// is restoring a placeholder shows instead, and once restore resolves with
/// no user the guard redirects to the login entry point, replacing history.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionReader>();
    crate::util::auth::install_unauth_redirect(session, use_navigate());

    view! {
        <Show
            when=move || evaluate(&session.get()) == GuardOutcome::Render
            fallback=|| view! { <p class="route-guard__pending">"Loading..."</p> }
        >
            {children()}
        </Show>
    }
}
