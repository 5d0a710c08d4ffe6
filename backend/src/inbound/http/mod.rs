//! HTTP inbound adapter exposing the drinks REST API.

pub mod auth;
pub mod drinks;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

use crate::domain::Error;

pub use error::{ApiResult, ErrorEnvelope};

/// Register the drinks routes.
///
/// Malformed path identifiers are answered like unknown ones.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default().error_handler(|_, _| Error::not_found().into()),
    )
    .service(drinks::list_drinks)
    .service(drinks::list_drink_details)
    .service(drinks::create_drink)
    .service(drinks::update_drink)
    .service(drinks::delete_drink)
    .service(drinks::login_results);
}

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiResult<()> {
    Err(Error::not_found())
}
