//! Drinks menu service implementing the driving ports.
//!
//! The service owns every write to the drinks table. It never validates
//! payloads itself: it only accepts a [`DrinkDraft`], which cannot exist
//! without passing validation.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use crate::domain::ports::{
    DrinkRepository, DrinkRepositoryError, DrinkServiceError, DrinksCommand, DrinksQuery,
};
use crate::domain::{Drink, DrinkDraft, DrinkId, Projection, RenderedDrink};

/// Drinks service backed by a [`DrinkRepository`].
#[derive(Clone)]
pub struct DrinksService<R> {
    repo: Arc<R>,
}

impl<R> DrinksService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn unavailable(error: DrinkRepositoryError) -> DrinkServiceError {
    error!(%error, "drink storage read failed");
    DrinkServiceError::unavailable(error.to_string())
}

fn unprocessable(error: DrinkRepositoryError) -> DrinkServiceError {
    error!(%error, "drink storage write failed");
    DrinkServiceError::unprocessable(error.to_string())
}

#[async_trait]
impl<R> DrinksQuery for DrinksService<R>
where
    R: DrinkRepository,
{
    async fn list(&self, projection: Projection) -> Result<Vec<RenderedDrink>, DrinkServiceError> {
        let drinks = self.repo.list().await.map_err(unavailable)?;
        Ok(drinks
            .iter()
            .map(|drink| drink.render(projection))
            .collect())
    }
}

#[async_trait]
impl<R> DrinksCommand for DrinksService<R>
where
    R: DrinkRepository,
{
    async fn create(&self, draft: DrinkDraft) -> Result<Drink, DrinkServiceError> {
        let drink = self.repo.insert(&draft).await.map_err(unprocessable)?;
        info!(id = %drink.id(), "drink created");
        Ok(drink)
    }

    async fn update(&self, id: DrinkId, draft: DrinkDraft) -> Result<Drink, DrinkServiceError> {
        let drink = self
            .repo
            .update(id, &draft)
            .await
            .map_err(unprocessable)?
            .ok_or_else(|| DrinkServiceError::not_found(id))?;
        info!(%id, "drink updated");
        Ok(drink)
    }

    async fn delete(&self, id: DrinkId) -> Result<DrinkId, DrinkServiceError> {
        if self.repo.delete(id).await.map_err(unprocessable)? {
            info!(%id, "drink deleted");
            Ok(id)
        } else {
            Err(DrinkServiceError::not_found(id))
        }
    }
}

#[cfg(test)]
#[path = "drinks_service_tests.rs"]
mod tests;
