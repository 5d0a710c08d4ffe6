//! Tests for the JWT verifier using HS256 tokens.

use super::*;
use crate::domain::Permission;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rstest::{fixture, rstest};
use serde_json::{Value, json};

const SECRET: &[u8] = b"flat-white-secret";
const ISSUER: &str = "https://coffee.example.com/";
const AUDIENCE: &str = "drinks";

#[fixture]
fn verifier() -> JwtTokenVerifier {
    let keys = KeySet::shared_secret(SECRET).expect("secret");
    JwtTokenVerifier::new(keys, ISSUER, AUDIENCE)
}

fn now() -> i64 {
    Utc::now().timestamp()
}

fn claims() -> Value {
    json!({
        "sub": "auth0|barista",
        "iss": ISSUER,
        "aud": AUDIENCE,
        "exp": now() + 3600,
        "permissions": ["get:drinks-detail", "post:drinks"],
    })
}

fn sign_with(claims: &Value, secret: &[u8]) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret),
    )
    .expect("encode token")
}

fn sign(claims: &Value) -> String {
    sign_with(claims, SECRET)
}

fn without(field: &str) -> Value {
    let mut value = claims();
    value
        .as_object_mut()
        .expect("claims object")
        .remove(field);
    value
}

fn with(field: &str, replacement: Value) -> Value {
    let mut value = claims();
    value[field] = replacement;
    value
}

#[rstest]
fn valid_token_yields_credential(verifier: JwtTokenVerifier) {
    let credential = verifier.verify(&sign(&claims())).expect("valid token");

    assert_eq!(credential.subject(), "auth0|barista");
    assert_eq!(credential.issuer(), ISSUER);
    assert_eq!(credential.audience(), [AUDIENCE.to_owned()]);
    assert!(credential.has_permission(Permission::GetDrinksDetail));
    assert!(credential.has_permission(Permission::PostDrinks));
    assert!(!credential.has_permission(Permission::DeleteDrinks));
}

#[rstest]
fn audience_list_is_accepted(verifier: JwtTokenVerifier) {
    let token = sign(&with("aud", json!([AUDIENCE, "https://other.example.com"])));
    let credential = verifier.verify(&token).expect("valid token");
    assert_eq!(credential.audience().len(), 2);
}

#[rstest]
fn empty_permissions_are_valid_but_grant_nothing(verifier: JwtTokenVerifier) {
    let token = sign(&with("permissions", json!([])));
    let credential = verifier.verify(&token).expect("valid token");
    assert_eq!(credential.permissions().count(), 0);
}

#[rstest]
fn expired_token_is_rejected(verifier: JwtTokenVerifier) {
    let token = sign(&with("exp", json!(now() - 5)));
    assert_eq!(verifier.verify(&token), Err(AuthError::Expired));
}

#[rstest]
fn foreign_signature_is_rejected(verifier: JwtTokenVerifier) {
    let token = sign_with(&claims(), b"someone-elses-secret");
    assert_eq!(verifier.verify(&token), Err(AuthError::InvalidSignature));
}

#[rstest]
fn unexpected_algorithm_is_rejected(verifier: JwtTokenVerifier) {
    let token = encode(
        &Header::new(Algorithm::HS384),
        &claims(),
        &EncodingKey::from_secret(SECRET),
    )
    .expect("encode token");
    assert_eq!(verifier.verify(&token), Err(AuthError::InvalidSignature));
}

#[rstest]
#[case::wrong_issuer(with("iss", json!("https://evil.example.com/")))]
#[case::wrong_audience(with("aud", json!("payments")))]
#[case::missing_permissions(without("permissions"))]
#[case::missing_subject(without("sub"))]
#[case::missing_issuer(without("iss"))]
#[case::missing_audience(without("aud"))]
#[case::missing_expiry(without("exp"))]
fn bad_claims_are_rejected(verifier: JwtTokenVerifier, #[case] claims: Value) {
    assert_eq!(verifier.verify(&sign(&claims)), Err(AuthError::InvalidClaims));
}

#[rstest]
#[case("not-a-token")]
#[case("a.b.c")]
#[case("")]
fn undecodable_token_is_malformed(verifier: JwtTokenVerifier, #[case] token: &str) {
    assert_eq!(verifier.verify(token), Err(AuthError::MalformedHeader));
}
