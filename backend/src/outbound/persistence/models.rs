//! Internal Diesel row structs for the drinks table.
//!
//! These never leave the persistence layer.

use diesel::prelude::*;

use super::schema::drinks;

/// Row read from `drinks`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = drinks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DrinkRow {
    pub id: i32,
    pub title: String,
    pub recipe: serde_json::Value,
}

/// Column values written on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = drinks)]
pub(crate) struct DrinkChanges<'a> {
    pub title: &'a str,
    pub recipe: serde_json::Value,
}
