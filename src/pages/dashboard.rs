//! Dashboard page: card inventory, card creation, and spend progress.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The card list and the
//! spend-progress banner load independently on mount; neither request waits
//! on the other.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::card_tile::CardTile;
use crate::components::progress_banner::ProgressBanner;
use crate::net::types::{Card, NewCard, SpendProgress};
use crate::state::session::{SessionManager, SessionReader};

/// Card networks offered by the create-card form.
const NETWORKS: [&str; 4] = ["Visa", "Mastercard", "Amex", "Discover"];

/// Validate the create-card form. The backend stores the network under both
/// `issuer` and `cardType`.
fn validate_new_card(name: &str, last4: &str, network: &str) -> Result<NewCard, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a card nickname.");
    }
    let last4 = last4.trim();
    if last4.len() != 4 || !last4.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the last 4 digits of the card.");
    }
    Ok(NewCard {
        card_name: name.to_owned(),
        issuer: network.to_owned(),
        card_type: network.to_owned(),
        last_four_digits: last4.to_owned(),
    })
}

#[cfg(feature = "csr")]
fn load_cards(
    manager: SessionManager,
    cards: RwSignal<Vec<Card>>,
    cards_loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let Some(token) = manager.token() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_cards(&token).await {
            Ok(list) => cards.set(list),
            Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
        }
        cards_loading.set(false);
    });
}

#[cfg(feature = "csr")]
fn load_spend_progress(manager: SessionManager, progress: RwSignal<Option<SpendProgress>>) {
    let Some(token) = manager.token() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_spend_progress(&token).await {
            Some(summary) => progress.set(Some(summary)),
            // Best-effort banner; the dashboard renders without it.
            None => log::debug!("spend progress unavailable"),
        }
    });
}

#[cfg(feature = "csr")]
fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let manager = expect_context::<SessionManager>();
    let session = expect_context::<SessionReader>();
    let navigate = use_navigate();

    let cards = RwSignal::new(Vec::<Card>::new());
    let cards_loading = RwSignal::new(true);
    let progress = RwSignal::new(None::<SpendProgress>);
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<String>);

    // Create-card form state.
    let new_name = RwSignal::new(String::new());
    let new_last4 = RwSignal::new(String::new());
    let new_network = RwSignal::new(NETWORKS[0].to_owned());
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    Effect::new(move || {
        load_cards(manager, cards, cards_loading, error);
        load_spend_progress(manager, progress);
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let card = match validate_new_card(&new_name.get(), &new_last4.get(), &new_network.get()) {
            Ok(card) => card,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = manager.token() else {
                busy.set(false);
                return;
            };
            match crate::net::api::create_card(&token, &card).await {
                Ok(_) => {
                    new_name.set(String::new());
                    new_last4.set(String::new());
                    new_network.set(NETWORKS[0].to_owned());
                    load_cards(manager, cards, cards_loading, error);
                }
                Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = card;
            busy.set(false);
        }
    };

    let on_generate = Callback::new(move |id: String| {
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let Some(token) = manager.token() else {
                return;
            };
            match crate::net::api::generate_transactions(&token, &id).await {
                Ok(()) => notice.set(Some("Transactions generated.".to_owned())),
                Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "csr")]
        {
            if !confirm("Remove this card and its transactions?") {
                return;
            }
            leptos::task::spawn_local(async move {
                let Some(token) = manager.token() else {
                    return;
                };
                match crate::net::api::delete_card(&token, &id).await {
                    Ok(()) => load_cards(manager, cards, cards_loading, error),
                    Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    });

    let on_logout = move |_| {
        manager.logout();
        navigate(crate::util::auth::LOGIN_PATH, crate::util::auth::replace_navigation());
    };

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |user| format!("Hello, {}", user.email))
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <div class="dashboard-page__identity">
                    <span class="dashboard-page__greeting">{greeting}</span>
                    <button class="btn" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </header>

            {move || progress.get().map(|summary| view! { <ProgressBanner progress=summary/> })}

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <Show when=move || notice.get().is_some()>
                <div class="form-notice">{move || notice.get().unwrap_or_default()}</div>
            </Show>

            <section class="panel">
                <h2>"Add New Card"</h2>
                <form on:submit=on_create>
                    <label class="form-label">
                        "Card Nickname"
                        <input
                            class="form-input"
                            type="text"
                            placeholder="e.g., Chase Sapphire"
                            prop:value=move || new_name.get()
                            on:input=move |ev| new_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Last 4 Digits"
                        <input
                            class="form-input"
                            type="text"
                            maxlength="4"
                            placeholder="1234"
                            prop:value=move || new_last4.get()
                            on:input=move |ev| new_last4.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form-label">
                        "Network"
                        <select
                            class="form-input"
                            on:change=move |ev| new_network.set(event_target_value(&ev))
                            prop:value=move || new_network.get()
                        >
                            {NETWORKS
                                .iter()
                                .map(|network| view! { <option value=*network>{*network}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Adding..." } else { "Add Card" }}
                    </button>
                </form>
            </section>

            <section>
                <h2>"Your Cards"</h2>
                <Show
                    when=move || !cards_loading.get()
                    fallback=|| view! { <p>"Loading cards..."</p> }
                >
                    <Show
                        when=move || !cards.get().is_empty()
                        fallback=|| view! { <p>"No cards yet. Add your first card above!"</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                cards
                                    .get()
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <CardTile card=card on_generate=on_generate on_delete=on_delete/>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </section>
        </div>
    }
}
