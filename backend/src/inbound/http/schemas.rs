//! OpenAPI schema definitions for the drinks API.
//!
//! Domain types stay free of `utoipa`; these mirrors exist only so the
//! generated document describes the wire format.

#![expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]

use utoipa::ToSchema;

/// Recipe line as submitted and as shown in the long projection.
#[derive(ToSchema)]
#[schema(as = Ingredient)]
pub struct IngredientSchema {
    /// Ingredient name.
    #[schema(example = "espresso")]
    name: String,
    /// `#` followed by 3 or 6 hex digits.
    #[schema(example = "#3b1f0e")]
    color: String,
    /// Relative quantity.
    #[schema(example = 1)]
    parts: i64,
}

/// Recipe line in the short projection.
#[derive(ToSchema)]
#[schema(as = ShortIngredient)]
pub struct ShortIngredientSchema {
    #[schema(example = "#3b1f0e")]
    color: String,
    #[schema(example = 1)]
    parts: i64,
}

/// Drink without ingredient names.
#[derive(ToSchema)]
#[schema(as = ShortDrink)]
pub struct ShortDrinkSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Latte")]
    title: String,
    recipe: Vec<ShortIngredientSchema>,
}

/// Drink with its full recipe.
#[derive(ToSchema)]
#[schema(as = LongDrink)]
pub struct LongDrinkSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Latte")]
    title: String,
    recipe: Vec<IngredientSchema>,
}

/// Body accepted by `POST /drinks` and `PATCH /drinks/{id}`.
#[derive(ToSchema)]
#[schema(as = DrinkPayload)]
pub struct DrinkPayloadSchema {
    #[schema(example = "Latte")]
    title: String,
    recipe: Vec<IngredientSchema>,
}

/// Public menu listing.
#[derive(ToSchema)]
#[schema(as = ShortDrinksResponse)]
pub struct ShortDrinksResponseSchema {
    #[schema(example = true)]
    success: bool,
    drinks: Vec<ShortDrinkSchema>,
}

/// Detailed listing, or the single drink written by a create or update.
#[derive(ToSchema)]
#[schema(as = LongDrinksResponse)]
pub struct LongDrinksResponseSchema {
    #[schema(example = true)]
    success: bool,
    drinks: Vec<LongDrinkSchema>,
}

/// Confirmation of a deletion.
#[derive(ToSchema)]
#[schema(as = DeleteResponse)]
pub struct DeleteResponseSchema {
    #[schema(example = true)]
    success: bool,
    /// Identifier of the removed drink.
    #[schema(example = 1)]
    delete: i32,
}

/// Error envelope shared by every failure.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
pub struct ErrorSchema {
    #[schema(example = false)]
    success: bool,
    /// HTTP status code.
    #[schema(example = 404)]
    error: u16,
    #[schema(example = "resource not found")]
    message: String,
}
