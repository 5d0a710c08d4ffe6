//! Driving ports for the drinks menu.
//!
//! Inbound adapters read the menu through [`DrinksQuery`] and change it
//! through [`DrinksCommand`]. Both report [`DrinkServiceError`] so each
//! adapter decides how a failure surfaces; the HTTP adapter, for instance,
//! reports every list failure as "not found".

use async_trait::async_trait;

use crate::domain::{Drink, DrinkDraft, DrinkId, Error, Projection, RenderedDrink};

use super::define_port_error;

define_port_error! {
    /// Failures of the drinks service.
    pub enum DrinkServiceError {
        /// No drink has the requested identifier.
        NotFound { id: DrinkId } => "drink {id} not found",
        /// The change could not be persisted.
        Unprocessable { message: String } => "drink could not be stored: {message}",
        /// Storage could not be reached.
        Unavailable { message: String } => "drink storage unavailable: {message}",
    }
}

impl From<DrinkServiceError> for Error {
    fn from(value: DrinkServiceError) -> Self {
        match value {
            DrinkServiceError::NotFound { .. } => Error::not_found(),
            DrinkServiceError::Unprocessable { .. } => Error::unprocessable(),
            DrinkServiceError::Unavailable { .. } => Error::service_unavailable(),
        }
    }
}

/// Read side of the menu.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinksQuery: Send + Sync {
    /// Every drink rendered in `projection`, ordered by identifier.
    async fn list(&self, projection: Projection) -> Result<Vec<RenderedDrink>, DrinkServiceError>;
}

/// Write side of the menu.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinksCommand: Send + Sync {
    /// Persist a new drink.
    async fn create(&self, draft: DrinkDraft) -> Result<Drink, DrinkServiceError>;

    /// Replace the title and recipe of drink `id`.
    async fn update(&self, id: DrinkId, draft: DrinkDraft) -> Result<Drink, DrinkServiceError>;

    /// Remove drink `id`, returning the removed identifier.
    async fn delete(&self, id: DrinkId) -> Result<DrinkId, DrinkServiceError>;
}
