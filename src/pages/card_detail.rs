//! Card detail page: transaction history and logging for one card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transaction fetch depends on the card fetch: it is not issued until
//! the card resolves, and is abandoned when the card fetch fails.

#[cfg(test)]
#[path = "card_detail_test.rs"]
mod card_detail_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Card, NewTransaction, Transaction};
use crate::state::session::SessionManager;
use crate::util::format::{date_portion, format_amount};

/// Spending categories offered by the add-transaction form.
const CATEGORIES: [&str; 6] = ["Dining", "Travel", "Groceries", "Gas", "Entertainment", "Other"];

/// Validate the add-transaction form. The amount must parse as a positive
/// dollar value.
fn validate_new_transaction(
    merchant: &str,
    amount: &str,
    category: &str,
    date: &str,
) -> Result<NewTransaction, &'static str> {
    let merchant = merchant.trim();
    if merchant.is_empty() {
        return Err("Enter a merchant name.");
    }
    let Ok(amount) = amount.trim().parse::<f64>() else {
        return Err("Enter a valid amount.");
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Enter a valid amount.");
    }
    let date = date.trim();
    if date.is_empty() {
        return Err("Pick a date.");
    }
    Ok(NewTransaction {
        merchant: merchant.to_owned(),
        amount,
        category: category.to_owned(),
        date: date.to_owned(),
    })
}

/// Today's date in `YYYY-MM-DD`, for the form default.
fn today() -> String {
    #[cfg(feature = "csr")]
    {
        let iso = String::from(js_sys::Date::new_0().to_iso_string());
        date_portion(&iso).to_owned()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

#[cfg(feature = "csr")]
fn load_card_and_transactions(
    manager: SessionManager,
    card_id: String,
    card: RwSignal<Option<Card>>,
    transactions: RwSignal<Vec<Transaction>>,
    error: RwSignal<Option<String>>,
) {
    let Some(token) = manager.token() else {
        return;
    };
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_card(&token, &card_id).await {
            Ok(detail) => card.set(Some(detail)),
            Err(e) => {
                // Abandon the dependent transaction fetch.
                error.set(Some(crate::util::auth::handle_api_error(manager, &e)));
                return;
            }
        }
        match crate::net::api::fetch_transactions(&token, &card_id).await {
            Ok(list) => transactions.set(list),
            Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
        }
    });
}

#[cfg(feature = "csr")]
fn confirm(message: &str) -> bool {
    web_sys::window().is_some_and(|w| w.confirm_with_message(message).unwrap_or(false))
}

#[component]
pub fn CardDetailPage() -> impl IntoView {
    let manager = expect_context::<SessionManager>();
    let navigate = use_navigate();
    let params = use_params_map();

    let card_id = move || params.read().get("id").unwrap_or_default();

    let card = RwSignal::new(None::<Card>);
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let error = RwSignal::new(None::<String>);

    // Add-transaction form state.
    let merchant = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let category = RwSignal::new(CATEGORIES[0].to_owned());
    let date = RwSignal::new(today());
    let busy = RwSignal::new(false);

    // Reload whenever the route parameter changes.
    #[cfg(feature = "csr")]
    Effect::new(move || {
        let id = card_id();
        if id.is_empty() {
            return;
        }
        card.set(None);
        transactions.set(Vec::new());
        load_card_and_transactions(manager, id, card, transactions, error);
    });
    #[cfg(not(feature = "csr"))]
    let _ = (manager, card_id);

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let tx = match validate_new_transaction(&merchant.get(), &amount.get(), &category.get(), &date.get()) {
            Ok(tx) => tx,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let id = card_id();
            leptos::task::spawn_local(async move {
                let Some(token) = manager.token() else {
                    busy.set(false);
                    return;
                };
                match crate::net::api::add_transaction(&token, &id, &tx).await {
                    Ok(_) => {
                        merchant.set(String::new());
                        amount.set(String::new());
                        category.set(CATEGORIES[0].to_owned());
                        date.set(today());
                        load_card_and_transactions(manager, id, card, transactions, error);
                    }
                    Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = tx;
            busy.set(false);
        }
    };

    let on_delete = Callback::new(move |tx_id: String| {
        #[cfg(feature = "csr")]
        {
            if !confirm("Are you sure you want to delete this transaction?") {
                return;
            }
            let id = card_id();
            leptos::task::spawn_local(async move {
                let Some(token) = manager.token() else {
                    return;
                };
                match crate::net::api::delete_transaction(&token, &id, &tx_id).await {
                    Ok(()) => load_card_and_transactions(manager, id, card, transactions, error),
                    Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = tx_id;
        }
    });

    let on_delete_all = move |_| {
        #[cfg(feature = "csr")]
        {
            if !confirm("Are you sure you want to delete ALL transactions for this card?") {
                return;
            }
            let id = card_id();
            leptos::task::spawn_local(async move {
                let Some(token) = manager.token() else {
                    return;
                };
                match crate::net::api::delete_all_transactions(&token, &id).await {
                    Ok(()) => transactions.set(Vec::new()),
                    Err(e) => error.set(Some(crate::util::auth::handle_api_error(manager, &e))),
                }
            });
        }
    };

    let back = move |_| navigate("/dashboard", NavigateOptions::default());

    view! {
        <Show
            when=move || card.get().is_some()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="detail-page">
                <header class="detail-page__header">
                    <button class="btn" on:click=back.clone()>
                        "\u{2190} Back to Dashboard"
                    </button>
                    {move || {
                        card.get().map(|c| {
                            view! {
                                <h1>{c.card_name.clone()}</h1>
                                <p class="detail-page__identity">
                                    {crate::components::card_tile::masked_identity(&c)}
                                </p>
                            }
                        })
                    }}
                </header>

                <Show when=move || error.get().is_some()>
                    <div class="form-error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                <section class="panel">
                    <h2>"Add Transaction"</h2>
                    <form on:submit=on_add.clone()>
                        <div class="form-grid">
                            <label class="form-label">
                                "Merchant"
                                <input
                                    class="form-input"
                                    type="text"
                                    placeholder="e.g., Starbucks"
                                    prop:value=move || merchant.get()
                                    on:input=move |ev| merchant.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-label">
                                "Amount ($)"
                                <input
                                    class="form-input"
                                    type="number"
                                    step="0.01"
                                    placeholder="0.00"
                                    prop:value=move || amount.get()
                                    on:input=move |ev| amount.set(event_target_value(&ev))
                                />
                            </label>
                            <label class="form-label">
                                "Category"
                                <select
                                    class="form-input"
                                    on:change=move |ev| category.set(event_target_value(&ev))
                                    prop:value=move || category.get()
                                >
                                    {CATEGORIES
                                        .iter()
                                        .map(|c| view! { <option value=*c>{*c}</option> })
                                        .collect::<Vec<_>>()}
                                </select>
                            </label>
                            <label class="form-label">
                                "Date"
                                <input
                                    class="form-input"
                                    type="date"
                                    prop:value=move || date.get()
                                    on:input=move |ev| date.set(event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Adding..." } else { "Add Transaction" }}
                        </button>
                    </form>
                </section>

                <section>
                    <div class="detail-page__list-header">
                        <h2>"Transactions"</h2>
                        <Show when=move || !transactions.get().is_empty()>
                            <button class="btn btn--danger" on:click=on_delete_all>
                                "Delete All Transactions"
                            </button>
                        </Show>
                    </div>
                    <Show
                        when=move || !transactions.get().is_empty()
                        fallback=|| view! { <p>"No transactions yet. Add your first transaction above!"</p> }
                    >
                        <div class="detail-page__transactions">
                            {move || {
                                transactions
                                    .get()
                                    .into_iter()
                                    .map(|tx| {
                                        let tx_id = tx.id.clone();
                                        view! {
                                            <div class="transaction-row">
                                                <div class="transaction-row__info">
                                                    <h3>{tx.merchant.clone()}</h3>
                                                    <p class="transaction-row__meta">
                                                        {format!("{} \u{2022} {}", tx.category, date_portion(&tx.date))}
                                                    </p>
                                                    <p class="transaction-row__amount">{format_amount(tx.amount)}</p>
                                                </div>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete.run(tx_id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
            </div>
        </Show>
    }
}
