//! Reusable card component for the dashboard card list.
//!
//! DESIGN
//! ======
//! Keeps card presentation and its action row in one place so the dashboard
//! only orchestrates requests. Navigation uses plain links; mutations go
//! back to the dashboard through callbacks.

#[cfg(test)]
#[path = "card_tile_test.rs"]
mod card_tile_test;

use leptos::prelude::*;

use crate::net::types::Card;

/// Masked card line, e.g. `Visa •••• 1234`.
pub fn masked_identity(card: &Card) -> String {
    format!("{} \u{2022}\u{2022}\u{2022}\u{2022} {}", card.issuer, card.last_four_digits)
}

/// A single registered card with its action row.
#[component]
pub fn CardTile(card: Card, on_generate: Callback<String>, on_delete: Callback<String>) -> impl IntoView {
    let identity = masked_identity(&card);
    let transactions_href = format!("/cards/{}", card.id);
    let rewards_href = format!("/cards/{}/rewards", card.id);
    let generate_id = card.id.clone();
    let delete_id = card.id.clone();

    view! {
        <div class="card-tile">
            <h3 class="card-tile__name">{card.card_name.clone()}</h3>
            <p class="card-tile__identity">{identity}</p>
            <div class="card-tile__actions">
                <a class="btn btn--view" href=transactions_href>
                    "View Transactions"
                </a>
                <a class="btn btn--rewards" href=rewards_href>
                    "View Rewards"
                </a>
                <button class="btn btn--generate" on:click=move |_| on_generate.run(generate_id.clone())>
                    "Generate Transactions"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |_| on_delete.run(delete_id.clone())
                    title="Remove card"
                    aria-label="Remove card"
                >
                    "Remove"
                </button>
            </div>
        </div>
    }
}
