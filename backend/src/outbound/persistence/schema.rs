//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations`; regenerate with `diesel print-schema`
//! after changing a migration.

diesel::table! {
    /// Drinks menu.
    drinks (id) {
        /// Serial primary key.
        id -> Int4,
        /// Display title, at most 80 characters.
        title -> Varchar,
        /// Ordered ingredient list as a JSON array of
        /// `{"name", "color", "parts"}` objects.
        recipe -> Jsonb,
    }
}
