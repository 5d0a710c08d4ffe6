//! Domain primitives, services and ports.
//!
//! Purpose: define the drinks menu model, the authorisation primitives and
//! the service that applies validated drafts to storage. Nothing in here
//! knows about HTTP or PostgreSQL; adapters live under `inbound` and
//! `outbound`.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Drink, DrinkDraft, Ingredient, HexColor and the projections.
//! - validate_drink_payload: the payload validator.
//! - Credential, Permission, AuthError, require: authorisation.
//! - DrinksService: the record service implementing the driving ports.

pub mod auth;
pub mod drinks;
pub mod drinks_service;
pub mod error;
pub mod ports;

pub use self::auth::{
    AuthError, Credential, Permission, authorize, bearer_token, require, require_async,
};
pub use self::drinks::{
    Drink, DrinkDraft, DrinkId, DrinkTitle, DrinkTitleError, DrinkValidationError, HexColor,
    Ingredient, LongDrink, Projection, RecipeValidationError, RenderedDrink, ShortDrink,
    ShortIngredient, ValidationErrorKind, validate_drink_payload,
};
pub use self::drinks_service::DrinksService;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
