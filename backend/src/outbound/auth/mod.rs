//! Bearer token verification against the identity provider's keys.

mod jwt_token_verifier;
mod key_set;

use url::Url;

pub use jwt_token_verifier::JwtTokenVerifier;
pub use key_set::{KeySet, KeySetError};

/// Issuer URL for an identity provider domain, e.g. `https://tenant.auth0.com/`.
pub fn issuer_for_domain(domain: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("https://{}/", domain.trim_end_matches('/')))
}

/// Location of the JWKS document published by `issuer`.
pub fn jwks_url(issuer: &Url) -> Result<Url, url::ParseError> {
    issuer.join(".well-known/jwks.json")
}
