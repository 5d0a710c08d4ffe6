//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only see domain ports, so
//! they can be exercised with in-memory or mocked adapters.

use std::sync::Arc;

use crate::domain::ports::{DrinksCommand, DrinksQuery, TokenVerifier};

/// Dependency bundle for HTTP handlers, built once at startup.
#[derive(Clone)]
pub struct HttpState {
    /// Read side of the menu.
    pub drinks_query: Arc<dyn DrinksQuery>,
    /// Write side of the menu.
    pub drinks_command: Arc<dyn DrinksCommand>,
    /// Bearer token verifier.
    pub verifier: Arc<dyn TokenVerifier>,
}

impl HttpState {
    /// Bundle the ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use coffee_shop::domain::DrinksService;
    /// use coffee_shop::domain::ports::InMemoryDrinkRepository;
    /// use coffee_shop::inbound::http::state::HttpState;
    /// use coffee_shop::outbound::auth::{JwtTokenVerifier, KeySet};
    ///
    /// let service = Arc::new(DrinksService::new(Arc::new(InMemoryDrinkRepository::new())));
    /// let keys = KeySet::shared_secret("dev-secret").expect("secret");
    /// let verifier = Arc::new(JwtTokenVerifier::new(keys, "https://issuer/", "drinks"));
    /// let state = HttpState::new(service.clone(), service, verifier);
    /// let _query = state.drinks_query.clone();
    /// ```
    pub fn new(
        drinks_query: Arc<dyn DrinksQuery>,
        drinks_command: Arc<dyn DrinksCommand>,
        verifier: Arc<dyn TokenVerifier>,
    ) -> Self {
        Self {
            drinks_query,
            drinks_command,
            verifier,
        }
    }
}
