//! Port for bearer token verification.

use crate::domain::{AuthError, Credential};

/// Turns a raw bearer token into a verified [`Credential`].
///
/// Implementations check the signature against their key set, then expiry,
/// issuer, audience and the presence of the `permissions` claim. Verification
/// is pure: keys are loaded before the verifier is constructed.
#[cfg_attr(test, mockall::automock)]
pub trait TokenVerifier: Send + Sync {
    /// Verify `raw_token` (without the `Bearer ` prefix).
    fn verify(&self, raw_token: &str) -> Result<Credential, AuthError>;
}
