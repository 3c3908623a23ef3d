use super::*;

#[test]
fn card_endpoint_formats_expected_path() {
    assert_eq!(card_endpoint("c-123"), "/api/cards/c-123");
}

#[test]
fn transaction_endpoints_format_expected_paths() {
    assert_eq!(transactions_endpoint("c-1"), "/api/cards/c-1/transactions");
    assert_eq!(transaction_endpoint("c-1", "t-9"), "/api/cards/c-1/transactions/t-9");
    assert_eq!(delete_all_transactions_endpoint("c-1"), "/api/cards/c-1/transactions/deleteAll");
    assert_eq!(generate_transactions_endpoint("c-1"), "/api/cards/c-1/transactions/generate");
}

#[test]
fn rewards_endpoint_switches_on_ranking() {
    assert_eq!(rewards_endpoint("c-1", true), "/api/cards/c-1/rewards/ranked");
    assert_eq!(rewards_endpoint("c-1", false), "/api/cards/c-1/rewards");
}

#[test]
fn auth_endpoints_format_expected_paths() {
    assert_eq!(login_endpoint(), "/api/auth/login");
    assert_eq!(register_endpoint(), "/api/auth/register");
    assert_eq!(cards_endpoint(), "/api/cards");
    assert_eq!(spend_progress_endpoint(), "/api/cards/gamification");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("tok-123"), "Bearer tok-123");
}

#[test]
fn classify_failure_maps_401_to_unauthorized() {
    // The fallback never masks an authorization failure, whatever the body said.
    assert_eq!(
        classify_failure(401, Some("bad token".to_owned()), "Failed to fetch cards"),
        ApiError::Unauthorized
    );
    assert_eq!(classify_failure(401, None, "Failed to fetch card"), ApiError::Unauthorized);
    assert_eq!(classify_failure(401, None, "Failed to add transaction"), ApiError::Unauthorized);
}

#[test]
fn unauthorized_status_tears_down_the_session_for_every_endpoint_family() {
    use crate::net::types::User;
    use crate::state::session::{SessionManager, SessionState};
    use crate::util::auth::handle_api_error;

    // Card-list retrieval, card-detail retrieval, and transaction mutation
    // all classify a 401 the same way, and the shared failure path must end
    // with the session and its record cleared.
    for fallback in ["Failed to fetch cards", "Failed to fetch card", "Failed to add transaction"] {
        let manager = SessionManager::new();
        manager.login(
            User { id: "u-1".to_owned(), email: "alice@example.com".to_owned(), username: None },
            "tok-1".to_owned(),
        );

        let err = classify_failure(401, None, fallback);
        handle_api_error(manager, &err);

        assert_eq!(manager.snapshot(), SessionState::signed_out());
        assert_eq!(manager.token(), None);
    }
}

#[test]
fn classify_failure_surfaces_backend_message_verbatim() {
    assert_eq!(
        classify_failure(409, Some("Card already exists".to_owned()), "Failed to create card"),
        ApiError::Rejected("Card already exists".to_owned())
    );
}

#[test]
fn classify_failure_falls_back_when_body_has_no_message() {
    assert_eq!(
        classify_failure(500, None, "Failed to fetch transactions"),
        ApiError::Rejected("Failed to fetch transactions".to_owned())
    );
}

#[test]
fn unauthorized_display_is_user_facing() {
    assert_eq!(
        ApiError::Unauthorized.to_string(),
        "Your session has expired. Please sign in again."
    );
}
