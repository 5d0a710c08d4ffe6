//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use coffee_shop::domain::ports::TokenVerifier;
use coffee_shop::outbound::persistence::DbPool;

/// Everything the server needs beyond its routes.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) verifier: Arc<dyn TokenVerifier>,
}

impl ServerConfig {
    /// Configuration with in-memory storage.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, verifier: Arc<dyn TokenVerifier>) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            verifier,
        }
    }

    /// Store drinks in PostgreSQL through `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
