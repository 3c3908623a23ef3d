//! Shared session-failure handling for authenticated pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page that issues authenticated requests must apply the same
//! authorization-failure behavior: tear down the session, after which the
//! route guard's redirect effect returns the user to the login entry point.
//! Routing all failures through here keeps that uniform.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::ApiError;
use crate::state::session::{SessionManager, SessionReader};

/// Login entry point used for every unauthenticated redirect.
pub const LOGIN_PATH: &str = "/";

/// Navigation options for leaving a protected view: replace history so
/// back-navigation cannot return to it.
pub fn replace_navigation() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}

/// Apply the shared failure convention for authenticated calls and return
/// the message to display inline. An authorization failure clears the
/// session and its persisted record first; the guard watching the session
/// then redirects before the message ever renders inside the guarded view.
pub fn handle_api_error(manager: SessionManager, err: &ApiError) -> String {
    if matches!(err, ApiError::Unauthorized) {
        manager.logout();
    }
    err.to_string()
}

/// Redirect to the login entry point whenever the session has resolved with
/// no user present. Installed once per guarded route.
pub fn install_unauth_redirect<F>(reader: SessionReader, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = reader.get();
        if !state.loading && state.user.is_none() {
            navigate(LOGIN_PATH, replace_navigation());
        }
    });
}
