//! Authorisation primitives: verified credentials, permissions and the
//! failures raised while establishing them.
//!
//! A [`Credential`] is only ever produced by a
//! [`TokenVerifier`](crate::domain::ports::TokenVerifier) after the token's
//! signature and claims check out. Handlers then pass it to
//! [`require`]/[`require_async`] to gate an operation on a [`Permission`].

mod guard;

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};

use super::Error;

pub use guard::{authorize, require, require_async};

/// Capability flags carried in the token's `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Permission {
    /// `get:drinks-detail`: read full recipes.
    GetDrinksDetail,
    /// `post:drinks`: create drinks.
    PostDrinks,
    /// `patch:drinks`: edit drinks.
    PatchDrinks,
    /// `delete:drinks`: remove drinks.
    DeleteDrinks,
}

impl Permission {
    /// Claim string as issued by the identity provider.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GetDrinksDetail => "get:drinks-detail",
            Self::PostDrinks => "post:drinks",
            Self::PatchDrinks => "patch:drinks",
            Self::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a request fails authentication or authorisation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("authorization header is expected")]
    MissingHeader,
    /// The header is not `Bearer <token>` or the token cannot be decoded.
    #[error("authorization header must be a bearer token")]
    MalformedHeader,
    /// The signature does not verify against any known key.
    #[error("token signature could not be verified")]
    InvalidSignature,
    /// The token's expiry is in the past.
    #[error("token expired")]
    Expired,
    /// Issuer, audience or required claims do not match expectations.
    #[error("incorrect claims, check the audience and issuer")]
    InvalidClaims,
    /// The credential lacks the permission the operation requires.
    #[error("permission {permission} not granted")]
    Forbidden {
        /// The missing permission.
        permission: Permission,
    },
}

impl AuthError {
    /// Stable identifier used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
            Self::InvalidSignature => "invalid_signature",
            Self::Expired => "expired",
            Self::InvalidClaims => "invalid_claims",
            Self::Forbidden { .. } => "forbidden",
        }
    }
}

impl From<AuthError> for Error {
    fn from(value: AuthError) -> Self {
        tracing::debug!(kind = value.kind(), error = %value, "request not authorised");
        match value {
            AuthError::Forbidden { .. } => Error::forbidden(),
            _ => Error::unauthorized(),
        }
    }
}

/// Extract the token from an `Authorization` header value.
///
/// # Examples
/// ```
/// use coffee_shop::domain::{AuthError, bearer_token};
///
/// assert_eq!(bearer_token(Some("Bearer abc.def.ghi")), Ok("abc.def.ghi"));
/// assert_eq!(bearer_token(None), Err(AuthError::MissingHeader));
/// assert_eq!(bearer_token(Some("Basic abc")), Err(AuthError::MalformedHeader));
/// ```
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Claims of a verified bearer token.
///
/// ## Invariants
/// - Constructed only from a token whose signature, issuer, audience and
///   expiry have been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    subject: String,
    issuer: String,
    audience: Vec<String>,
    expires_at: DateTime<Utc>,
    permissions: BTreeSet<String>,
}

impl Credential {
    /// Assemble a credential from verified claims.
    pub fn new<I, P>(
        subject: impl Into<String>,
        issuer: impl Into<String>,
        audience: Vec<String>,
        expires_at: DateTime<Utc>,
        permissions: I,
    ) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        Self {
            subject: subject.into(),
            issuer: issuer.into(),
            audience,
            expires_at,
            permissions: permissions.into_iter().map(Into::into).collect(),
        }
    }

    /// Token subject (`sub`).
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Token issuer (`iss`).
    pub fn issuer(&self) -> &str {
        self.issuer.as_str()
    }

    /// Audiences the token was issued for (`aud`).
    pub fn audience(&self) -> &[String] {
        &self.audience
    }

    /// Expiry instant (`exp`).
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Granted permission strings.
    pub fn permissions(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }

    /// Whether `permission` was granted.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(permission.as_str())
    }
}
