//! Shared DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (Mongo-style `_id`,
//! camelCase fields) so serde round-trips stay lossless and page code can
//! remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the login and registration endpoints.
///
/// The session layer treats this as an opaque identity payload; only the
/// pages interpret individual fields for display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Account email, shown in the dashboard header.
    pub email: String,
    /// Optional display name chosen at registration.
    #[serde(default)]
    pub username: Option<String>,
}

/// Successful login/registration response: the identity plus its credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// A registered payment card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique card identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// User-chosen nickname (e.g. "Chase Sapphire").
    pub card_name: String,
    /// Card network/issuer (e.g. "Visa").
    pub issuer: String,
    /// Issuer-reported card type, when the backend distinguishes it.
    #[serde(default)]
    pub card_type: Option<String>,
    /// Last four digits of the card number.
    pub last_four_digits: String,
}

/// Request body for card creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCard {
    pub card_name: String,
    pub issuer: String,
    pub card_type: String,
    pub last_four_digits: String,
}

/// A transaction logged against a card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub merchant: String,
    pub amount: f64,
    pub category: String,
    /// ISO 8601 date string.
    pub date: String,
}

/// Request body for logging a transaction.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewTransaction {
    pub merchant: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// A redeemable reward, optionally scored by the backend's ranking service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    /// Unique reward identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub description: String,
    /// Reward category (e.g. "travel", "cashback").
    #[serde(rename = "type")]
    pub kind: String,
    /// Points required to redeem.
    pub points_cost: i64,
    /// Cash value in dollars.
    pub value: f64,
    /// Ranking score; present only on ranked responses.
    #[serde(default)]
    pub score: Option<f64>,
}

/// Spend-progress summary for the dashboard banner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendProgress {
    pub message: String,
    /// Progress toward the top reward, 0-100. Absent while no goal exists.
    #[serde(default)]
    pub progress_percent: Option<f64>,
    #[serde(default)]
    pub current_points: Option<i64>,
    #[serde(default)]
    pub target_points: Option<i64>,
}
