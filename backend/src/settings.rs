//! Application settings loaded via OrthoConfig.
//!
//! Values come from `COFFEE_SHOP_*` environment variables, command-line flags
//! or a configuration file, in OrthoConfig's usual precedence.

use std::fmt;
use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

use crate::outbound::auth::{issuer_for_domain, jwks_url};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Problems with the loaded settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// A required value was not supplied.
    #[error("missing required setting `{field}`")]
    Missing { field: &'static str },
    /// A value could not be parsed.
    #[error("invalid value {value:?} for `{field}`: {message}")]
    Invalid {
        field: &'static str,
        value: String,
        message: String,
    },
}

impl SettingsError {
    fn invalid(field: &'static str, value: &str, message: impl fmt::Display) -> Self {
        Self::Invalid {
            field,
            value: value.to_owned(),
            message: message.to_string(),
        }
    }
}

/// Raw settings as loaded.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COFFEE_SHOP")]
pub struct AppSettings {
    /// Socket address to listen on.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// PostgreSQL connection string; drinks are kept in memory when absent.
    pub database_url: Option<String>,
    /// Identity provider domain, e.g. `tenant.auth0.com`.
    pub auth_domain: Option<String>,
    /// Audience tokens must be issued for.
    pub auth_audience: Option<String>,
    /// HS256 secret used instead of the provider's JWKS. Development only.
    pub auth_secret: Option<String>,
}

impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("bind_addr", &self.bind_addr)
            .field("database_url", &self.database_url.as_ref().map(|_| "<set>"))
            .field("auth_domain", &self.auth_domain)
            .field("auth_audience", &self.auth_audience)
            .field("auth_secret", &self.auth_secret.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Where token signing keys come from.
pub enum KeySource {
    /// Download the JWKS document at startup.
    Jwks(Url),
    /// Shared HS256 secret.
    SharedSecret(Zeroizing<String>),
}

/// Validated token settings.
pub struct AuthSettings {
    /// Expected `iss` claim.
    pub issuer: Url,
    /// Expected `aud` claim.
    pub audience: String,
    /// Signing key source.
    pub keys: KeySource,
}

fn required<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, SettingsError> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or(SettingsError::Missing { field })
}

impl AppSettings {
    /// Listen address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.trim();
        raw.parse()
            .map_err(|err| SettingsError::invalid("bind_addr", raw, err))
    }

    /// Database connection string, if one is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Issuer, audience and key source for token verification.
    pub fn auth(&self) -> Result<AuthSettings, SettingsError> {
        let domain = required(self.auth_domain.as_deref(), "auth_domain")?;
        let audience = required(self.auth_audience.as_deref(), "auth_audience")?;
        let issuer = issuer_for_domain(domain)
            .map_err(|err| SettingsError::invalid("auth_domain", domain, err))?;
        let keys = match self.auth_secret.as_deref().filter(|secret| !secret.is_empty()) {
            Some(secret) => KeySource::SharedSecret(Zeroizing::new(secret.to_owned())),
            None => KeySource::Jwks(
                jwks_url(&issuer)
                    .map_err(|err| SettingsError::invalid("auth_domain", domain, err))?,
            ),
        };
        Ok(AuthSettings {
            issuer,
            audience: audience.to_owned(),
            keys,
        })
    }
}
