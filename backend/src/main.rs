//! Backend entry-point: loads settings, prepares storage and token keys, then
//! serves the drinks API.

mod server;

use std::fmt::Display;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use coffee_shop::domain::ports::TokenVerifier;
use coffee_shop::inbound::http::health::HealthState;
use coffee_shop::outbound::auth::{JwtTokenVerifier, KeySet, KeySetError};
use coffee_shop::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use coffee_shop::settings::{AppSettings, AuthSettings, KeySource};

use server::{ServerConfig, create_server};

fn startup_error(err: impl Display) -> std::io::Error {
    std::io::Error::other(err.to_string())
}

async fn build_verifier(auth: AuthSettings) -> Result<Arc<dyn TokenVerifier>, KeySetError> {
    let keys = match auth.keys {
        KeySource::SharedSecret(secret) => {
            warn!("verifying tokens with a shared HS256 secret (dev only)");
            KeySet::shared_secret(secret.as_bytes())?
        }
        KeySource::Jwks(url) => {
            info!(%url, "fetching token signing keys");
            KeySet::fetch(&reqwest::Client::new(), &url).await?
        }
    };
    Ok(Arc::new(JwtTokenVerifier::new(
        keys,
        auth.issuer.as_str(),
        &auth.audience,
    )))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(startup_error)?;
    let bind_addr = settings.bind_addr().map_err(startup_error)?;
    let auth = settings.auth().map_err(startup_error)?;
    let verifier = build_verifier(auth).await.map_err(startup_error)?;

    let mut config = ServerConfig::new(bind_addr, verifier);
    if let Some(database_url) = settings.database_url() {
        run_pending_migrations(database_url)
            .await
            .map_err(startup_error)?;
        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(startup_error)?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_unhealthy();
    result
}
