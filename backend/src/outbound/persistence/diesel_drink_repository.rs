//! PostgreSQL-backed [`DrinkRepository`] using Diesel.
//!
//! Each operation is a single statement, so every mutation commits
//! atomically. Inserts and updates use `RETURNING` so callers receive the
//! stored row.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{DrinkRepository, DrinkRepositoryError, ensure_title_fits};
use crate::domain::{Drink, DrinkDraft, DrinkId, DrinkTitle, Ingredient};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{DrinkChanges, DrinkRow};
use super::pool::DbPool;
use super::schema::drinks;

/// Diesel implementation of the [`DrinkRepository`] port.
#[derive(Clone)]
pub struct DieselDrinkRepository {
    pool: DbPool,
}

impl DieselDrinkRepository {
    /// Create a repository over `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn changes(draft: &DrinkDraft) -> Result<DrinkChanges<'_>, DrinkRepositoryError> {
    let recipe = serde_json::to_value(draft.recipe())
        .map_err(|err| DrinkRepositoryError::query(format!("serialise recipe: {err}")))?;
    Ok(DrinkChanges {
        title: draft.title().as_str(),
        recipe,
    })
}

/// Rebuild a domain drink from a stored row.
///
/// Rows are re-validated on the way out; a row that no longer satisfies the
/// domain invariants is reported as a query failure.
fn row_to_drink(row: DrinkRow) -> Result<Drink, DrinkRepositoryError> {
    let DrinkRow { id, title, recipe } = row;
    let malformed = |detail: String| {
        warn!(id, %detail, "stored drink is malformed");
        DrinkRepositoryError::query(format!("stored drink {id} is malformed"))
    };
    let title = DrinkTitle::new(title).map_err(|err| malformed(err.to_string()))?;
    let recipe: Vec<Ingredient> =
        serde_json::from_value(recipe).map_err(|err| malformed(err.to_string()))?;
    Ok(Drink::from_draft(
        DrinkId::new(id),
        DrinkDraft::new(title, recipe),
    ))
}

#[async_trait]
impl DrinkRepository for DieselDrinkRepository {
    async fn list(&self) -> Result<Vec<Drink>, DrinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<DrinkRow> = drinks::table
            .order(drinks::id.asc())
            .select(DrinkRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        rows.into_iter().map(row_to_drink).collect()
    }

    async fn insert(&self, draft: &DrinkDraft) -> Result<Drink, DrinkRepositoryError> {
        ensure_title_fits(draft)?;
        let values = changes(draft)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: DrinkRow = diesel::insert_into(drinks::table)
            .values(&values)
            .returning(DrinkRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        row_to_drink(row)
    }

    async fn update(
        &self,
        id: DrinkId,
        draft: &DrinkDraft,
    ) -> Result<Option<Drink>, DrinkRepositoryError> {
        let values = changes(draft)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // An absent row is reported as such even when the title is too long.
        if let Err(err) = ensure_title_fits(draft) {
            let exists: bool = diesel::select(diesel::dsl::exists(drinks::table.find(id.get())))
                .get_result(&mut conn)
                .await
                .map_err(map_diesel_error)?;
            return if exists { Err(err) } else { Ok(None) };
        }
        let row: Option<DrinkRow> = diesel::update(drinks::table.find(id.get()))
            .set(&values)
            .returning(DrinkRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        row.map(row_to_drink).transpose()
    }

    async fn delete(&self, id: DrinkId) -> Result<bool, DrinkRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(drinks::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(deleted > 0)
    }
}
