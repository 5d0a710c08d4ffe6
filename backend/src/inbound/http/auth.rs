//! Bearer authentication for HTTP handlers.
//!
//! [`Caller`] is an extractor: listing it before the body in a handler's
//! arguments makes authentication fail before the payload is looked at.

use actix_web::dev::Payload;
use actix_web::http::header::{AUTHORIZATION, HeaderMap};
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};
use tracing::error;

use crate::domain::ports::TokenVerifier;
use crate::domain::{AuthError, Credential, Error, bearer_token};

use super::state::HttpState;

/// Verify the `Authorization` header in `headers`.
pub fn authenticate(
    headers: &HeaderMap,
    verifier: &dyn TokenVerifier,
) -> Result<Credential, AuthError> {
    let header = headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| AuthError::MalformedHeader))
        .transpose()?;
    let token = bearer_token(header)?;
    verifier.verify(token)
}

/// Verified caller of the current request.
#[derive(Debug, Clone)]
pub struct Caller(Credential);

impl Caller {
    /// Claims of the verified token.
    pub fn credential(&self) -> &Credential {
        &self.0
    }
}

impl FromRequest for Caller {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<HttpState>>() else {
            error!("HttpState missing from app data");
            return ready(Err(Error::internal()));
        };
        ready(
            authenticate(req.headers(), state.verifier.as_ref())
                .map(Caller)
                .map_err(Error::from),
        )
    }
}
