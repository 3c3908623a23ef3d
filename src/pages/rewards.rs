//! Rewards page: ranked recommendations or the plain catalog for one card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The rewards fetch depends on the card fetch and is abandoned when the
//! card fetch fails. Toggling the ranking switches endpoints and refetches.

#[cfg(test)]
#[path = "rewards_test.rs"]
mod rewards_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Card, Reward};
use crate::state::session::SessionManager;
use crate::util::format::{format_amount, format_points};

/// Heading for the rewards list in each mode.
fn list_heading(ranked: bool) -> &'static str {
    if ranked { "Recommended Rewards (Ranked)" } else { "All Rewards" }
}

/// Rank badge label for a reward's position in the ranked list.
fn rank_label(index: usize) -> String {
    format!("#{}", index + 1)
}

#[cfg(feature = "csr")]
fn load_card_and_rewards(
    manager: SessionManager,
    card_id: String,
    ranked: bool,
    card: RwSignal<Option<Card>>,
    rewards: RwSignal<Vec<Reward>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    let Some(token) = manager.token() else {
        return;
    };
    loading.set(true);
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_card(&token, &card_id).await {
            Ok(detail) => card.set(Some(detail)),
            Err(e) => {
                // Abandon the dependent rewards fetch.
                error.set(Some(crate::util::auth::handle_api_error(manager, &e)));
                loading.set(false);
                return;
            }
        }
        match crate::net::api::fetch_rewards(&token, &card_id, ranked).await {
            Ok(list) => rewards.set(list),
            Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
        }
        loading.set(false);
    });
}

#[component]
pub fn RewardsPage() -> impl IntoView {
    let manager = expect_context::<SessionManager>();
    let navigate = use_navigate();
    let params = use_params_map();

    let card_id = move || params.read().get("id").unwrap_or_default();

    let card = RwSignal::new(None::<Card>);
    let rewards = RwSignal::new(Vec::<Reward>::new());
    let ranked = RwSignal::new(true);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    // Refetch when the route parameter or the ranking toggle changes.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let id = card_id();
        let ranked_now = ranked.get();
        if id.is_empty() {
            return;
        }
        load_card_and_rewards(manager, id, ranked_now, card, rewards, loading, error);
    });
    #[cfg(not(feature = "csr"))]
    let _ = (manager, card_id);

    let on_toggle = move |_| ranked.update(|r| *r = !*r);

    let back = move |_| navigate("/dashboard", NavigateOptions::default());

    view! {
        <div class="rewards-page">
            <header class="rewards-page__header">
                <button class="btn" on:click=back>
                    "\u{2190} Back to Dashboard"
                </button>
                <h1>"Rewards"</h1>
                {move || {
                    card.get().map(|c| {
                        view! {
                            <p class="rewards-page__identity">
                                {format!("{} \u{2022} {}", c.card_name, crate::components::card_tile::masked_identity(&c))}
                            </p>
                        }
                    })
                }}
            </header>

            <Show when=move || error.get().is_some()>
                <div class="form-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            <section class="panel rewards-page__controls">
                <span class="rewards-page__toggle-label">"Ranking:"</span>
                <button
                    class="btn"
                    class:btn--primary=move || ranked.get()
                    on:click=on_toggle
                >
                    {move || if ranked.get() { "ON" } else { "OFF" }}
                </button>
                <span class="rewards-page__toggle-hint">
                    {move || {
                        if ranked.get() {
                            "(Showing ranked recommendations)"
                        } else {
                            "(Showing all rewards)"
                        }
                    }}
                </span>
            </section>

            <section>
                <h2>{move || list_heading(ranked.get())}</h2>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <p>"Loading rewards..."</p> }
                >
                    <Show
                        when=move || !rewards.get().is_empty()
                        fallback=|| view! { <p>"No rewards available yet."</p> }
                    >
                        <div class="rewards-page__list">
                            {move || {
                                let show_rank = ranked.get();
                                rewards
                                    .get()
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, reward)| {
                                        view! {
                                            <div class="reward-row">
                                                <Show when=move || show_rank>
                                                    <span class="reward-row__rank">{rank_label(index)}</span>
                                                </Show>
                                                <h3>{reward.name.clone()}</h3>
                                                <p class="reward-row__description">{reward.description.clone()}</p>
                                                <p>
                                                    <strong>"Type: "</strong>
                                                    {reward.kind.clone()}
                                                </p>
                                                <p>
                                                    <strong>"Points Required: "</strong>
                                                    {format_points(reward.points_cost)}
                                                </p>
                                                <p>
                                                    <strong>"Value: "</strong>
                                                    {format_amount(reward.value)}
                                                </p>
                                                {reward.score.map(|score| {
                                                    view! {
                                                        <p class="reward-row__score">
                                                            {format!("Score: {score:.2}")}
                                                        </p>
                                                    }
                                                })}
                                            </div>
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
