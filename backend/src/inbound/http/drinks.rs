//! Drinks menu HTTP handlers.
//!
//! ```text
//! GET    /drinks
//! GET    /drinks-detail
//! POST   /drinks
//! PATCH  /drinks/{id}
//! DELETE /drinks/{id}
//! GET    /login-results
//! ```
//!
//! Write handlers take the body as raw bytes: the caller is authenticated and
//! authorised before the payload is parsed, so a bad token always wins over a
//! bad body.

use actix_web::{HttpResponse, delete, get, patch, post, web};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::domain::ports::DrinkServiceError;
use crate::domain::{
    Drink, DrinkDraft, DrinkId, Error, Permission, Projection, RenderedDrink, require_async,
    validate_drink_payload,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::Caller;
use crate::inbound::http::schemas::{
    DeleteResponseSchema, DrinkPayloadSchema, ErrorSchema, LongDrinksResponseSchema,
    ShortDrinksResponseSchema,
};
use crate::inbound::http::state::HttpState;

/// Successful listing or write.
#[derive(Debug, Serialize)]
pub struct DrinksResponse {
    /// Always `true`.
    pub success: bool,
    /// Drinks in the requested projection.
    pub drinks: Vec<RenderedDrink>,
}

impl DrinksResponse {
    fn new(drinks: Vec<RenderedDrink>) -> Self {
        Self {
            success: true,
            drinks,
        }
    }
}

/// Successful deletion.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    /// Always `true`.
    pub success: bool,
    /// Identifier of the removed drink.
    pub delete: DrinkId,
}

/// Parse and validate a drink body.
///
/// Field-level detail is logged; the client only sees a generic 400.
pub(crate) fn parse_draft(body: &[u8]) -> Result<DrinkDraft, Error> {
    let value: Value = serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "drink payload is not JSON");
        Error::invalid_request()
    })?;
    validate_drink_payload(&value).map_err(|err| {
        warn!(
            kind = %err.kind(),
            field = err.field(),
            ingredient = ?err.ingredient(),
            "drink payload rejected"
        );
        Error::invalid_request()
    })
}

/// Listing failures are reported as "not found" to clients.
fn listing_error(err: DrinkServiceError) -> Error {
    error!(error = %err, "drink listing failed");
    Error::not_found()
}

/// Response for a created or updated drink.
fn written(drink: &Drink) -> HttpResponse {
    HttpResponse::Ok().json(DrinksResponse::new(vec![drink.render(Projection::Long)]))
}

async fn list(state: &HttpState, projection: Projection) -> ApiResult<HttpResponse> {
    let drinks = state
        .drinks_query
        .list(projection)
        .await
        .map_err(listing_error)?;
    Ok(HttpResponse::Ok().json(DrinksResponse::new(drinks)))
}

/// Public menu: titles, colours and parts.
#[utoipa::path(
    get,
    path = "/drinks",
    responses(
        (status = 200, description = "Drinks in short form", body = ShortDrinksResponseSchema),
        (status = 404, description = "Menu unavailable", body = ErrorSchema)
    ),
    tags = ["drinks"],
    security([]),
    operation_id = "listDrinks"
)]
#[get("/drinks")]
pub async fn list_drinks(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    list(&state, Projection::Short).await
}

/// Full recipes, ingredient names included.
#[utoipa::path(
    get,
    path = "/drinks-detail",
    responses(
        (status = 200, description = "Drinks in long form", body = LongDrinksResponseSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Missing get:drinks-detail", body = ErrorSchema),
        (status = 404, description = "Menu unavailable", body = ErrorSchema)
    ),
    tags = ["drinks"],
    operation_id = "listDrinkDetails"
)]
#[get("/drinks-detail")]
pub async fn list_drink_details(
    state: web::Data<HttpState>,
    caller: Caller,
) -> ApiResult<HttpResponse> {
    require_async(caller.credential(), Permission::GetDrinksDetail, || {
        list(&state, Projection::Long)
    })
    .await
}

/// Add a drink to the menu.
#[utoipa::path(
    post,
    path = "/drinks",
    request_body = DrinkPayloadSchema,
    responses(
        (status = 200, description = "Created drink", body = LongDrinksResponseSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Missing post:drinks", body = ErrorSchema),
        (status = 422, description = "Drink could not be stored", body = ErrorSchema)
    ),
    tags = ["drinks"],
    operation_id = "createDrink"
)]
#[post("/drinks")]
pub async fn create_drink(
    state: web::Data<HttpState>,
    caller: Caller,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    require_async(caller.credential(), Permission::PostDrinks, || async {
        let draft = parse_draft(&body)?;
        let drink = state.drinks_command.create(draft).await?;
        Ok::<_, Error>(written(&drink))
    })
    .await
}

/// Replace a drink's title and recipe.
#[utoipa::path(
    patch,
    path = "/drinks/{id}",
    params(("id" = i32, Path, description = "Drink identifier")),
    request_body = DrinkPayloadSchema,
    responses(
        (status = 200, description = "Updated drink", body = LongDrinksResponseSchema),
        (status = 400, description = "Invalid payload", body = ErrorSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Missing patch:drinks", body = ErrorSchema),
        (status = 404, description = "No such drink", body = ErrorSchema),
        (status = 422, description = "Drink could not be stored", body = ErrorSchema)
    ),
    tags = ["drinks"],
    operation_id = "updateDrink"
)]
#[patch("/drinks/{id}")]
pub async fn update_drink(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<i32>,
    body: web::Bytes,
) -> ApiResult<HttpResponse> {
    let id = DrinkId::new(path.into_inner());
    require_async(caller.credential(), Permission::PatchDrinks, || async {
        let draft = parse_draft(&body)?;
        let drink = state.drinks_command.update(id, draft).await?;
        Ok::<_, Error>(written(&drink))
    })
    .await
}

/// Remove a drink from the menu.
#[utoipa::path(
    delete,
    path = "/drinks/{id}",
    params(("id" = i32, Path, description = "Drink identifier")),
    responses(
        (status = 200, description = "Drink removed", body = DeleteResponseSchema),
        (status = 401, description = "Unauthorised", body = ErrorSchema),
        (status = 403, description = "Missing delete:drinks", body = ErrorSchema),
        (status = 404, description = "No such drink", body = ErrorSchema),
        (status = 422, description = "Drink could not be removed", body = ErrorSchema)
    ),
    tags = ["drinks"],
    operation_id = "deleteDrink"
)]
#[delete("/drinks/{id}")]
pub async fn delete_drink(
    state: web::Data<HttpState>,
    caller: Caller,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = DrinkId::new(path.into_inner());
    require_async(caller.credential(), Permission::DeleteDrinks, || async {
        let deleted = state.drinks_command.delete(id).await?;
        Ok::<_, Error>(HttpResponse::Ok().json(DeleteResponse {
            success: true,
            delete: deleted,
        }))
    })
    .await
}

/// Landing page for the identity provider's login redirect.
#[utoipa::path(
    get,
    path = "/login-results",
    responses((status = 200, description = "Login finished", content_type = "text/plain", body = String)),
    tags = ["auth"],
    security([]),
    operation_id = "loginResults"
)]
#[get("/login-results")]
pub async fn login_results() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Login complete")
}

#[cfg(test)]
#[path = "drinks_tests.rs"]
mod tests;
