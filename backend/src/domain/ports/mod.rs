//! Domain ports defining the edges of the hexagon.
//!
//! Driving ports ([`DrinksQuery`], [`DrinksCommand`]) are what inbound
//! adapters call; driven ports ([`DrinkRepository`], [`TokenVerifier`]) are
//! what outbound adapters implement. Each exposes a typed error so adapters
//! map their failures into predictable variants.

mod macros;
pub(crate) use macros::define_port_error;

mod drink_repository;
mod drinks_service;
mod token_verifier;

#[cfg(test)]
pub use drink_repository::MockDrinkRepository;
pub use drink_repository::{
    DrinkRepository, DrinkRepositoryError, InMemoryDrinkRepository, MAX_TITLE_CHARS,
    ensure_title_fits,
};
#[cfg(test)]
pub use drinks_service::{MockDrinksCommand, MockDrinksQuery};
pub use drinks_service::{DrinkServiceError, DrinksCommand, DrinksQuery};
#[cfg(test)]
pub use token_verifier::MockTokenVerifier;
pub use token_verifier::TokenVerifier;
