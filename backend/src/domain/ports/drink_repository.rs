//! Port for drink persistence.
//!
//! The [`DrinkRepository`] trait is the driven edge between the drinks
//! service and storage. [`InMemoryDrinkRepository`] backs the service when no
//! database is configured and in tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Drink, DrinkDraft, DrinkId};

use super::define_port_error;

/// Longest title the `drinks.title` column accepts.
pub const MAX_TITLE_CHARS: usize = 80;

define_port_error! {
    /// Errors raised by drink repository adapters.
    pub enum DrinkRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "drink repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "drink repository query failed: {message}",
        /// The row was rejected by a storage constraint.
        Constraint { message: String } =>
            "drink violates a storage constraint: {message}",
    }
}

/// Port for drink storage and retrieval.
///
/// Every mutation is a single-row atomic commit; callers get the stored row
/// back so the rendered response always reflects what was persisted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DrinkRepository: Send + Sync {
    /// All drinks ordered by identifier.
    async fn list(&self) -> Result<Vec<Drink>, DrinkRepositoryError>;

    /// Insert a new drink and return it with its assigned identifier.
    async fn insert(&self, draft: &DrinkDraft) -> Result<Drink, DrinkRepositoryError>;

    /// Replace title and recipe of drink `id`.
    ///
    /// Returns `None` when no drink has that identifier.
    async fn update(
        &self,
        id: DrinkId,
        draft: &DrinkDraft,
    ) -> Result<Option<Drink>, DrinkRepositoryError>;

    /// Remove drink `id`, reporting whether a row was deleted.
    async fn delete(&self, id: DrinkId) -> Result<bool, DrinkRepositoryError>;
}

#[derive(Debug)]
struct Table {
    next_id: i32,
    rows: BTreeMap<DrinkId, Drink>,
}

/// Process-local drink table.
///
/// Mirrors the PostgreSQL adapter's observable behaviour: identifiers start at
/// 1 and are never reused, and titles longer than [`MAX_TITLE_CHARS`] are
/// rejected as a constraint violation.
#[derive(Debug)]
pub struct InMemoryDrinkRepository {
    table: Mutex<Table>,
}

impl Default for InMemoryDrinkRepository {
    fn default() -> Self {
        Self {
            table: Mutex::new(Table {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryDrinkRepository {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Table>, DrinkRepositoryError> {
        self.table
            .lock()
            .map_err(|_| DrinkRepositoryError::connection("in-memory drink table poisoned"))
    }
}

/// Reject drafts whose title exceeds [`MAX_TITLE_CHARS`].
pub fn ensure_title_fits(draft: &DrinkDraft) -> Result<(), DrinkRepositoryError> {
    let chars = draft.title().as_str().chars().count();
    if chars > MAX_TITLE_CHARS {
        return Err(DrinkRepositoryError::constraint(format!(
            "title has {chars} characters, at most {MAX_TITLE_CHARS} allowed"
        )));
    }
    Ok(())
}

#[async_trait]
impl DrinkRepository for InMemoryDrinkRepository {
    async fn list(&self) -> Result<Vec<Drink>, DrinkRepositoryError> {
        Ok(self.lock()?.rows.values().cloned().collect())
    }

    async fn insert(&self, draft: &DrinkDraft) -> Result<Drink, DrinkRepositoryError> {
        ensure_title_fits(draft)?;
        let mut table = self.lock()?;
        let id = DrinkId::new(table.next_id);
        table.next_id += 1;
        let drink = Drink::from_draft(id, draft.clone());
        table.rows.insert(id, drink.clone());
        Ok(drink)
    }

    async fn update(
        &self,
        id: DrinkId,
        draft: &DrinkDraft,
    ) -> Result<Option<Drink>, DrinkRepositoryError> {
        let mut table = self.lock()?;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        ensure_title_fits(draft)?;
        *row = Drink::from_draft(id, draft.clone());
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: DrinkId) -> Result<bool, DrinkRepositoryError> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DrinkTitle, HexColor, Ingredient};
    use rstest::{fixture, rstest};

    fn draft(title: &str) -> DrinkDraft {
        let color = HexColor::parse("#6f4e37").expect("colour");
        let ingredient = Ingredient::try_new("coffee", color, 2).expect("ingredient");
        DrinkDraft::new(DrinkTitle::new(title).expect("title"), vec![ingredient])
    }

    #[fixture]
    fn repo() -> InMemoryDrinkRepository {
        InMemoryDrinkRepository::new()
    }

    #[rstest]
    #[tokio::test]
    async fn assigns_increasing_identifiers(repo: InMemoryDrinkRepository) {
        let first = repo.insert(&draft("Flat white")).await.expect("insert");
        let second = repo.insert(&draft("Cortado")).await.expect("insert");
        assert_eq!(first.id(), DrinkId::new(1));
        assert_eq!(second.id(), DrinkId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_are_not_reused_after_delete(repo: InMemoryDrinkRepository) {
        let first = repo.insert(&draft("Mocha")).await.expect("insert");
        assert!(repo.delete(first.id()).await.expect("delete"));
        let second = repo.insert(&draft("Mocha")).await.expect("insert");
        assert_eq!(second.id(), DrinkId::new(2));
        assert!(!repo.delete(first.id()).await.expect("second delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_missing_row_returns_none(repo: InMemoryDrinkRepository) {
        let result = repo
            .update(DrinkId::new(999), &draft("Ghost"))
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn overlong_titles_violate_constraint(repo: InMemoryDrinkRepository) {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let err = repo.insert(&draft(&title)).await.expect_err("too long");
        assert!(matches!(err, DrinkRepositoryError::Constraint { .. }));
        assert!(repo.list().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_row_wins_over_overlong_title(repo: InMemoryDrinkRepository) {
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let result = repo
            .update(DrinkId::new(999), &draft(&title))
            .await
            .expect("update");
        assert!(result.is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn overlong_title_leaves_existing_row_untouched(repo: InMemoryDrinkRepository) {
        let stored = repo.insert(&draft("Latte")).await.expect("insert");
        let title = "x".repeat(MAX_TITLE_CHARS + 1);
        let err = repo
            .update(stored.id(), &draft(&title))
            .await
            .expect_err("too long");
        assert!(matches!(err, DrinkRepositoryError::Constraint { .. }));
        assert_eq!(repo.list().await.expect("list"), vec![stored]);
    }
}
