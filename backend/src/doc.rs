//! OpenAPI documentation for the drinks API.
//!
//! The document is served by Swagger UI in debug builds and printed by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    DeleteResponseSchema, DrinkPayloadSchema, ErrorSchema, IngredientSchema,
    LongDrinkSchema, LongDrinksResponseSchema, ShortDrinkSchema, ShortDrinksResponseSchema,
    ShortIngredientSchema,
};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Registers the bearer token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Access token whose `permissions` claim grants the operation.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Coffee shop drinks API",
        description = "Drinks menu with permission-gated recipe management."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerAuth" = [])),
    paths(
        crate::inbound::http::drinks::list_drinks,
        crate::inbound::http::drinks::list_drink_details,
        crate::inbound::http::drinks::create_drink,
        crate::inbound::http::drinks::update_drink,
        crate::inbound::http::drinks::delete_drink,
        crate::inbound::http::drinks::login_results,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        IngredientSchema,
        ShortIngredientSchema,
        ShortDrinkSchema,
        LongDrinkSchema,
        DrinkPayloadSchema,
        ShortDrinksResponseSchema,
        LongDrinksResponseSchema,
        DeleteResponseSchema,
        ErrorSchema
    )),
    tags(
        (name = "drinks", description = "Drinks menu"),
        (name = "auth", description = "Identity provider callbacks"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
