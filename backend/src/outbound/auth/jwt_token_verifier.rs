//! `jsonwebtoken`-backed implementation of the [`TokenVerifier`] port.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Validation, decode, decode_header};
use serde::Deserialize;
use tracing::debug;

use crate::domain::ports::TokenVerifier;
use crate::domain::{AuthError, Credential};

use super::KeySet;

const REQUIRED_CLAIMS: [&str; 4] = ["exp", "iss", "aud", "sub"];

/// The `aud` claim, which may be a single string or a list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Audience {
    One(String),
    Many(Vec<String>),
}

impl Audience {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(aud) => vec![aud],
            Self::Many(aud) => aud,
        }
    }
}

/// Claims read from a token. Every field is optional so absent claims are
/// reported by validation rather than as a decoding failure.
#[derive(Debug, Deserialize)]
struct TokenClaims {
    sub: Option<String>,
    iss: Option<String>,
    aud: Option<Audience>,
    exp: Option<i64>,
    permissions: Option<Vec<String>>,
}

/// Verifies bearer tokens against a [`KeySet`] with a fixed issuer and
/// audience.
///
/// Expiry is checked with zero leeway.
#[derive(Debug)]
pub struct JwtTokenVerifier {
    keys: KeySet,
    validation: Validation,
}

impl JwtTokenVerifier {
    /// Build a verifier accepting tokens from `issuer` addressed to
    /// `audience`.
    pub fn new(keys: KeySet, issuer: &str, audience: &str) -> Self {
        let mut validation = Validation::new(keys.algorithm());
        validation.set_issuer(&[issuer]);
        validation.set_audience(&[audience]);
        validation.set_required_spec_claims(&REQUIRED_CLAIMS);
        validation.leeway = 0;
        Self { keys, validation }
    }
}

fn map_jwt_error(err: &JwtError) -> AuthError {
    match err.kind() {
        ErrorKind::ExpiredSignature => AuthError::Expired,
        ErrorKind::InvalidIssuer
        | ErrorKind::InvalidAudience
        | ErrorKind::InvalidSubject
        | ErrorKind::ImmatureSignature
        | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_) => AuthError::MalformedHeader,
        _ => AuthError::InvalidSignature,
    }
}

fn rejected(err: JwtError) -> AuthError {
    let mapped = map_jwt_error(&err);
    debug!(error = %err, kind = mapped.kind(), "token rejected");
    mapped
}

impl TokenVerifier for JwtTokenVerifier {
    fn verify(&self, raw_token: &str) -> Result<Credential, AuthError> {
        let header = decode_header(raw_token).map_err(rejected)?;
        if header.alg != self.keys.algorithm() {
            debug!(alg = ?header.alg, "token signed with unexpected algorithm");
            return Err(AuthError::InvalidSignature);
        }
        let key = self.keys.decoding_key(header.kid.as_deref())?;
        let claims = decode::<TokenClaims>(raw_token, &key, &self.validation)
            .map_err(rejected)?
            .claims;

        let permissions = claims.permissions.ok_or(AuthError::InvalidClaims)?;
        let (Some(subject), Some(issuer), Some(audience), Some(exp)) =
            (claims.sub, claims.iss, claims.aud, claims.exp)
        else {
            return Err(AuthError::InvalidClaims);
        };
        let expires_at: DateTime<Utc> =
            DateTime::from_timestamp(exp, 0).ok_or(AuthError::InvalidClaims)?;

        Ok(Credential::new(
            subject,
            issuer,
            audience.into_vec(),
            expires_at,
            permissions,
        ))
    }
}

#[cfg(test)]
#[path = "jwt_token_verifier_tests.rs"]
mod tests;
