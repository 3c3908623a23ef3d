//! REST API client for the Ordinal backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, with the bearer credential
//! attached to every authenticated request.
//! Native (tests, tooling): stubs returning a transport error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 maps to
//! `ApiError::Unauthorized` so callers can apply the shared session-expiry
//! convention; other rejections carry the backend's `message` field verbatim.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AuthPayload, Card, NewCard, NewTransaction, Reward, SpendProgress, Transaction};

/// Failure taxonomy for backend calls.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The backend rejected the credential. Handled by session teardown.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// The backend rejected the request for domain reasons.
    #[error("{0}")]
    Rejected(String),
    /// Network or parse failure.
    #[error("{0}")]
    Transport(String),
}

#[cfg(not(feature = "csr"))]
impl ApiError {
    fn unavailable() -> Self {
        ApiError::Transport("requests are not available outside the browser".to_owned())
    }
}

/// Base URL for the backend, fixed at build time.
#[cfg(any(test, feature = "csr"))]
fn api_base_url() -> &'static str {
    option_env!("ORDINAL_API_URL").unwrap_or("/api")
}

#[cfg(any(test, feature = "csr"))]
fn register_endpoint() -> String {
    format!("{}/auth/register", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint() -> String {
    format!("{}/auth/login", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn cards_endpoint() -> String {
    format!("{}/cards", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn card_endpoint(card_id: &str) -> String {
    format!("{}/cards/{card_id}", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn transactions_endpoint(card_id: &str) -> String {
    format!("{}/cards/{card_id}/transactions", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn transaction_endpoint(card_id: &str, tx_id: &str) -> String {
    format!("{}/cards/{card_id}/transactions/{tx_id}", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn delete_all_transactions_endpoint(card_id: &str) -> String {
    format!("{}/cards/{card_id}/transactions/deleteAll", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn generate_transactions_endpoint(card_id: &str) -> String {
    format!("{}/cards/{card_id}/transactions/generate", api_base_url())
}

/// Endpoint for a card's rewards; `ranked` selects the backend's
/// ranking service over the plain catalog listing.
#[cfg(any(test, feature = "csr"))]
fn rewards_endpoint(card_id: &str, ranked: bool) -> String {
    if ranked {
        format!("{}/cards/{card_id}/rewards/ranked", api_base_url())
    } else {
        format!("{}/cards/{card_id}/rewards", api_base_url())
    }
}

#[cfg(any(test, feature = "csr"))]
fn spend_progress_endpoint() -> String {
    format!("{}/cards/gamification", api_base_url())
}

#[cfg(any(test, feature = "csr"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-success response to the error taxonomy. 401 always means the
/// credential is invalid or expired; everything else surfaces the backend's
/// message, or the per-operation fallback when the body carried none.
#[cfg(any(test, feature = "csr"))]
fn classify_failure(status: u16, message: Option<String>, fallback: &str) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    ApiError::Rejected(message.unwrap_or_else(|| fallback.to_owned()))
}

#[cfg(feature = "csr")]
async fn failure_from(resp: gloo_net::http::Response, fallback: &str) -> ApiError {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }
    let message = resp.json::<ErrorBody>().await.ok().and_then(|body| body.message);
    classify_failure(resp.status(), message, fallback)
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "csr")]
async fn parse_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(transport)
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend's rejection message (duplicate email, weak password)
/// or a transport error.
pub async fn register(email: &str, username: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "username": username, "password": password });
        let resp = gloo_net::http::Request::post(&register_endpoint())
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Registration failed").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, username, password);
        Err(ApiError::unavailable())
    }
}

/// Sign in via `POST /auth/login`, returning the user and bearer token.
///
/// # Errors
///
/// Returns the backend's rejection message (bad credentials) or a transport
/// error.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, ApiError> {
    #[cfg(feature = "csr")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&login_endpoint())
            .json(&payload)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Login failed").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ApiError::unavailable())
    }
}

/// Fetch all of the user's cards via `GET /cards`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn fetch_cards(token: &str) -> Result<Vec<Card>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&cards_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to fetch cards").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::unavailable())
    }
}

/// Register a new card via `POST /cards`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message (duplicate card, malformed input) or a transport error.
pub async fn create_card(token: &str, card: &NewCard) -> Result<Card, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&cards_endpoint())
            .header("Authorization", &bearer(token))
            .json(card)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to create card").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card);
        Err(ApiError::unavailable())
    }
}

/// Delete a card via `DELETE /cards/{cardId}`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn delete_card(token: &str, card_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&card_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to delete card").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id);
        Err(ApiError::unavailable())
    }
}

/// Fetch a single card via `GET /cards/{cardId}`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn fetch_card(token: &str, card_id: &str) -> Result<Card, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&card_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to fetch card").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id);
        Err(ApiError::unavailable())
    }
}

/// Fetch a card's transactions via `GET /cards/{cardId}/transactions`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn fetch_transactions(token: &str, card_id: &str) -> Result<Vec<Transaction>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&transactions_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to fetch transactions").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id);
        Err(ApiError::unavailable())
    }
}

/// Log a transaction via `POST /cards/{cardId}/transactions`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn add_transaction(token: &str, card_id: &str, tx: &NewTransaction) -> Result<Transaction, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&transactions_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .json(tx)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to add transaction").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id, tx);
        Err(ApiError::unavailable())
    }
}

/// Delete one transaction via `DELETE /cards/{cardId}/transactions/{txId}`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn delete_transaction(token: &str, card_id: &str, tx_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&transaction_endpoint(card_id, tx_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to delete transaction").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id, tx_id);
        Err(ApiError::unavailable())
    }
}

/// Delete every transaction on a card via
/// `DELETE /cards/{cardId}/transactions/deleteAll`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn delete_all_transactions(token: &str, card_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&delete_all_transactions_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to delete transactions").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id);
        Err(ApiError::unavailable())
    }
}

/// Seed demo transactions via `POST /cards/{cardId}/transactions/generate`.
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn generate_transactions(token: &str, card_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&generate_transactions_endpoint(card_id))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to generate transactions").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id);
        Err(ApiError::unavailable())
    }
}

/// Fetch a card's rewards. `ranked` selects
/// `GET /cards/{cardId}/rewards/ranked` (backend ranking service) over
/// `GET /cards/{cardId}/rewards` (plain catalog).
///
/// # Errors
///
/// `Unauthorized` when the credential is rejected; otherwise the backend's
/// message or a transport error.
pub async fn fetch_rewards(token: &str, card_id: &str, ranked: bool) -> Result<Vec<Reward>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&rewards_endpoint(card_id, ranked))
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(failure_from(resp, "Failed to fetch rewards").await);
        }
        parse_json(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, card_id, ranked);
        Err(ApiError::unavailable())
    }
}

/// Fetch the spend-progress summary via `GET /cards/gamification`.
///
/// Returns `None` on any failure; the banner is best-effort and the
/// dashboard renders without it.
pub async fn fetch_spend_progress(token: &str) -> Option<SpendProgress> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&spend_progress_endpoint())
            .header("Authorization", &bearer(token))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SpendProgress>().await.ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        None
    }
}
