//! Diesel and pool error mapping into [`DrinkRepositoryError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::DrinkRepositoryError;

use super::pool::PoolError;

/// Map a pool failure to a connection error.
pub fn map_pool_error(error: PoolError) -> DrinkRepositoryError {
    DrinkRepositoryError::connection(error.message())
}

/// Map a Diesel failure to the repository error taxonomy.
///
/// Integrity violations become `Constraint`, dropped connections become
/// `Connection` and everything else is a `Query` failure.
pub fn map_diesel_error(error: DieselError) -> DrinkRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(
            DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::UniqueViolation,
            info,
        ) => DrinkRepositoryError::constraint(info.message()),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            DrinkRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => DrinkRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => DrinkRepositoryError::query("database query error"),
        _ => DrinkRepositoryError::query("database error"),
    }
}
