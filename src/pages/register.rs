//! Registration page with auto-login on success.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionManager;

/// Validated registration form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Registration {
    email: String,
    username: String,
    password: String,
}

/// Trim, require every field, and check the password confirmation before any
/// request is made.
fn validate_registration_input(
    email: &str,
    username: &str,
    password: &str,
    confirm: &str,
) -> Result<Registration, &'static str> {
    let email = email.trim();
    let username = username.trim();
    if email.is_empty() || username.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(Registration {
        email: email.to_owned(),
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let manager = expect_context::<SessionManager>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration_input(
            &email.get(),
            &username.get(),
            &password.get(),
            &confirm.get(),
        ) {
            Ok(values) => values,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&registration.email, &registration.username, &registration.password)
                    .await
                {
                    Ok(payload) => {
                        manager.login(payload.user, payload.token);
                        navigate("/dashboard", NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&navigate, &manager, registration);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Register for Ordinal"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <label class="form-label">
                        "Email"
                        <input
                            class="form-input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Username"
                        <input
                            class="form-input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Password"
                        <input
                            class="form-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Confirm Password"
                        <input
                            class="form-input"
                            type="password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary login-form__submit" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="login-card__footer">
                    "Already have an account? "
                    <A href="/">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
