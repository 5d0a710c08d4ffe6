//! Coffee shop drinks backend.
//!
//! A drinks menu served over HTTP. Anyone may read the short menu; full
//! recipes and every change require a bearer token whose `permissions`
//! claim grants the operation.
//!
//! - [`domain`]: drinks model, payload validation, permission guard and the
//!   drinks service.
//! - [`inbound`]: actix-web handlers.
//! - [`outbound`]: JWT verification and PostgreSQL storage.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

pub use doc::ApiDoc;
pub use middleware::Trace;
