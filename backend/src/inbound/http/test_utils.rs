//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::http::header::AUTHORIZATION;
use chrono::{Duration, Utc};

use crate::domain::ports::{MockDrinksCommand, MockDrinksQuery, MockTokenVerifier};
use crate::domain::{AuthError, Credential};

use super::state::HttpState;

/// Token the mock verifier accepts.
pub const GOOD_TOKEN: &str = "good.bearer.token";

/// Credential granting `permissions`.
pub fn credential(permissions: &[&str]) -> Credential {
    Credential::new(
        "auth0|barista",
        "https://coffee.example.com/",
        vec!["drinks".to_owned()],
        Utc::now() + Duration::hours(1),
        permissions.iter().copied(),
    )
}

/// Verifier accepting [`GOOD_TOKEN`] with `permissions` and rejecting any
/// other token as badly signed.
pub fn verifier_granting(permissions: &'static [&'static str]) -> MockTokenVerifier {
    let mut verifier = MockTokenVerifier::new();
    verifier.expect_verify().returning(move |token| {
        if token == GOOD_TOKEN {
            Ok(credential(permissions))
        } else {
            Err(AuthError::InvalidSignature)
        }
    });
    verifier
}

/// `Authorization` header carrying `token`.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

/// Assemble handler state from mocks.
pub fn state(
    query: MockDrinksQuery,
    command: MockDrinksCommand,
    verifier: MockTokenVerifier,
) -> HttpState {
    HttpState::new(Arc::new(query), Arc::new(command), Arc::new(verifier))
}
