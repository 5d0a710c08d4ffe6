//! Builds the HTTP state from the configured storage backend.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use coffee_shop::domain::DrinksService;
use coffee_shop::domain::ports::{DrinkRepository, InMemoryDrinkRepository, TokenVerifier};
use coffee_shop::inbound::http::state::HttpState;
use coffee_shop::outbound::persistence::DieselDrinkRepository;

use super::ServerConfig;

fn drinks_state<R>(repo: R, verifier: Arc<dyn TokenVerifier>) -> web::Data<HttpState>
where
    R: DrinkRepository + 'static,
{
    let service = Arc::new(DrinksService::new(Arc::new(repo)));
    web::Data::new(HttpState::new(service.clone(), service, verifier))
}

/// Use the Diesel repository when a pool is configured, otherwise an
/// in-memory table that is lost on restart.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let verifier = Arc::clone(&config.verifier);
    match &config.db_pool {
        Some(pool) => drinks_state(DieselDrinkRepository::new(pool.clone()), verifier),
        None => {
            warn!("no database configured; drinks are kept in memory");
            drinks_state(InMemoryDrinkRepository::new(), verifier)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coffee_shop::domain::Projection;
    use coffee_shop::outbound::auth::{JwtTokenVerifier, KeySet};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn without_pool_drinks_start_empty_in_memory() {
        let keys = KeySet::shared_secret("test-secret").expect("secret");
        let verifier = Arc::new(JwtTokenVerifier::new(keys, "https://issuer/", "drinks"));
        let config = ServerConfig::new(([127, 0, 0, 1], 0).into(), verifier);

        let state = build_http_state(&config);
        let drinks = state
            .drinks_query
            .list(Projection::Short)
            .await
            .expect("in-memory listing");
        assert!(drinks.is_empty());
    }
}
