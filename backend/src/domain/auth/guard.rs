//! Permission guard composing a verified credential with an operation.

use std::future::Future;

use super::{AuthError, Credential, Permission};

/// Check that `credential` grants `permission`.
pub fn authorize(credential: &Credential, permission: Permission) -> Result<(), AuthError> {
    if credential.has_permission(permission) {
        Ok(())
    } else {
        Err(AuthError::Forbidden { permission })
    }
}

/// Run `operation` only when `credential` grants `permission`.
///
/// The operation's result is returned unchanged. On a missing permission the
/// operation is never invoked and [`AuthError::Forbidden`] is converted into
/// the caller's error type.
///
/// # Examples
/// ```
/// use chrono::Utc;
/// use coffee_shop::domain::{AuthError, Credential, Permission, require};
///
/// let credential = Credential::new("sub", "iss", Vec::new(), Utc::now(), ["post:drinks"]);
/// let out: Result<u8, AuthError> = require(&credential, Permission::PostDrinks, || Ok(7));
/// assert_eq!(out, Ok(7));
///
/// let denied: Result<u8, AuthError> = require(&credential, Permission::PatchDrinks, || Ok(7));
/// assert!(matches!(denied, Err(AuthError::Forbidden { .. })));
/// ```
pub fn require<T, E, F>(credential: &Credential, permission: Permission, operation: F) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E>,
    E: From<AuthError>,
{
    authorize(credential, permission)?;
    operation()
}

/// Async form of [`require`] for operations that await storage.
pub async fn require_async<T, E, F, Fut>(
    credential: &Credential,
    permission: Permission,
    operation: F,
) -> Result<T, E>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: From<AuthError>,
{
    authorize(credential, permission)?;
    operation().await
}
