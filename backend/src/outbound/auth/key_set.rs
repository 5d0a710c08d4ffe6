//! Decoding keys for bearer token verification.
//!
//! Keys come either from the identity provider's JWKS document, fetched once
//! at startup, or from a shared HS256 secret for local development.

use std::fmt;

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::{Algorithm, DecodingKey};
use tracing::{debug, info};
use url::Url;
use zeroize::Zeroizing;

use crate::domain::AuthError;

/// Errors raised while loading a key set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeySetError {
    /// The JWKS document could not be downloaded.
    #[error("failed to fetch JWKS from {url}: {message}")]
    Fetch { url: String, message: String },
    /// The JWKS document is not valid JSON of the expected shape.
    #[error("failed to parse JWKS: {message}")]
    Parse { message: String },
    /// The JWKS document contains no keys.
    #[error("JWKS contains no keys")]
    Empty,
    /// The shared secret is empty.
    #[error("shared secret must not be empty")]
    EmptySecret,
}

/// Keys a [`JwtTokenVerifier`](super::JwtTokenVerifier) checks signatures
/// against.
pub enum KeySet {
    /// HS256 shared secret.
    SharedSecret(Zeroizing<Vec<u8>>),
    /// RS256 public keys selected by the token's `kid`.
    Jwks(JwkSet),
}

impl fmt::Debug for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SharedSecret(_) => f.write_str("KeySet::SharedSecret(<redacted>)"),
            Self::Jwks(set) => write!(f, "KeySet::Jwks({} keys)", set.keys.len()),
        }
    }
}

impl KeySet {
    /// Use a shared HS256 secret.
    pub fn shared_secret(secret: impl Into<Vec<u8>>) -> Result<Self, KeySetError> {
        let secret = Zeroizing::new(secret.into());
        if secret.is_empty() {
            return Err(KeySetError::EmptySecret);
        }
        Ok(Self::SharedSecret(secret))
    }

    /// Parse a JWKS document.
    pub fn from_jwks_json(document: &str) -> Result<Self, KeySetError> {
        let set: JwkSet = serde_json::from_str(document).map_err(|err| KeySetError::Parse {
            message: err.to_string(),
        })?;
        Self::from_jwks(set)
    }

    fn from_jwks(set: JwkSet) -> Result<Self, KeySetError> {
        if set.keys.is_empty() {
            return Err(KeySetError::Empty);
        }
        Ok(Self::Jwks(set))
    }

    /// Download the JWKS document at `url`.
    pub async fn fetch(client: &reqwest::Client, url: &Url) -> Result<Self, KeySetError> {
        let fetch_error = |err: reqwest::Error| KeySetError::Fetch {
            url: url.to_string(),
            message: err.to_string(),
        };
        debug!(%url, "fetching JWKS");
        let set: JwkSet = client
            .get(url.clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(fetch_error)?
            .json()
            .await
            .map_err(fetch_error)?;
        info!(%url, keys = set.keys.len(), "loaded JWKS");
        Self::from_jwks(set)
    }

    /// Signing algorithm tokens must use with this key set.
    pub fn algorithm(&self) -> Algorithm {
        match self {
            Self::SharedSecret(_) => Algorithm::HS256,
            Self::Jwks(_) => Algorithm::RS256,
        }
    }

    /// Select the key for a token whose header names `kid`.
    pub(crate) fn decoding_key(&self, kid: Option<&str>) -> Result<DecodingKey, AuthError> {
        match self {
            Self::SharedSecret(secret) => Ok(DecodingKey::from_secret(secret)),
            Self::Jwks(set) => {
                let jwk = kid
                    .and_then(|kid| set.find(kid))
                    .ok_or(AuthError::InvalidSignature)?;
                DecodingKey::from_jwk(jwk).map_err(|err| {
                    debug!(error = %err, kid, "unusable JWKS entry");
                    AuthError::InvalidSignature
                })
            }
        }
    }
}
