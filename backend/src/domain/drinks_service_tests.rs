//! Tests for the drinks service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::{InMemoryDrinkRepository, MockDrinkRepository};
use crate::domain::{DrinkTitle, HexColor, Ingredient, LongDrink};
use rstest::{fixture, rstest};

fn ingredient(name: &str, color: &str, parts: i64) -> Ingredient {
    Ingredient::try_new(name, HexColor::parse(color).expect("colour"), parts).expect("ingredient")
}

fn draft(title: &str, recipe: Vec<Ingredient>) -> DrinkDraft {
    DrinkDraft::new(DrinkTitle::new(title).expect("title"), recipe)
}

#[fixture]
fn latte() -> DrinkDraft {
    draft(
        "Latte",
        vec![
            ingredient("espresso", "#3b1f0e", 1),
            ingredient("steamed milk", "#fff", 3),
        ],
    )
}

#[fixture]
fn service() -> DrinksService<InMemoryDrinkRepository> {
    DrinksService::new(Arc::new(InMemoryDrinkRepository::new()))
}

fn long_drinks(rendered: Vec<RenderedDrink>) -> Vec<LongDrink> {
    rendered
        .into_iter()
        .map(|drink| match drink {
            RenderedDrink::Long(long) => long,
            RenderedDrink::Short(_) => panic!("expected long projection"),
        })
        .collect()
}

#[rstest]
#[tokio::test]
async fn created_drink_appears_in_long_listing(
    service: DrinksService<InMemoryDrinkRepository>,
    latte: DrinkDraft,
) {
    let created = service.create(latte.clone()).await.expect("create");

    let listed = long_drinks(service.list(Projection::Long).await.expect("list"));
    let [only] = listed.as_slice() else {
        panic!("expected exactly one drink");
    };
    assert_eq!(only.id, created.id());
    assert_eq!(only.title, latte.title().as_str());
    assert_eq!(only.recipe.as_slice(), latte.recipe());
}

#[rstest]
#[tokio::test]
async fn short_listing_hides_ingredient_names(
    service: DrinksService<InMemoryDrinkRepository>,
    latte: DrinkDraft,
) {
    service.create(latte).await.expect("create");

    let listed = service.list(Projection::Short).await.expect("list");
    let value = serde_json::to_value(&listed).expect("serialise");
    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "title": "Latte",
            "recipe": [
                {"color": "#3b1f0e", "parts": 1},
                {"color": "#fff", "parts": 3}
            ]
        }])
    );
}

#[rstest]
#[tokio::test]
async fn repeated_update_yields_same_state(
    service: DrinksService<InMemoryDrinkRepository>,
    latte: DrinkDraft,
) {
    let created = service.create(latte).await.expect("create");
    let iced = draft("Iced latte", vec![ingredient("ice", "#e0ffff", 2)]);

    let first = service
        .update(created.id(), iced.clone())
        .await
        .expect("first update");
    let after_first = service.list(Projection::Long).await.expect("list");
    let second = service
        .update(created.id(), iced)
        .await
        .expect("second update");
    let after_second = service.list(Projection::Long).await.expect("list");

    assert_eq!(first, second);
    assert_eq!(after_first, after_second);
    assert_eq!(first.title().as_str(), "Iced latte");
}

#[rstest]
#[tokio::test]
async fn update_of_unknown_drink_is_not_found(
    service: DrinksService<InMemoryDrinkRepository>,
    latte: DrinkDraft,
) {
    let err = service
        .update(DrinkId::new(999), latte)
        .await
        .expect_err("no drink 999");
    assert_eq!(err, DrinkServiceError::not_found(DrinkId::new(999)));
}

#[rstest]
#[tokio::test]
async fn unknown_drink_is_not_found_even_with_overlong_title(
    service: DrinksService<InMemoryDrinkRepository>,
) {
    let recipe = vec![ingredient("tea", "#c0ffee", 1)];
    let err = service
        .update(DrinkId::new(999), draft(&"t".repeat(81), recipe))
        .await
        .expect_err("no drink 999");
    assert_eq!(err, DrinkServiceError::not_found(DrinkId::new(999)));
}

#[rstest]
#[tokio::test]
async fn delete_removes_drink_once(
    service: DrinksService<InMemoryDrinkRepository>,
    latte: DrinkDraft,
) {
    let created = service.create(latte).await.expect("create");

    assert_eq!(service.delete(created.id()).await, Ok(created.id()));
    assert_eq!(
        service.delete(created.id()).await,
        Err(DrinkServiceError::not_found(created.id()))
    );
    assert!(service.list(Projection::Short).await.expect("list").is_empty());
}

#[rstest]
#[tokio::test]
async fn list_failure_is_reported_unavailable() {
    let mut repo = MockDrinkRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Err(DrinkRepositoryError::connection("refused")));

    let service = DrinksService::new(Arc::new(repo));
    let err = service
        .list(Projection::Long)
        .await
        .expect_err("list should fail");
    assert!(matches!(err, DrinkServiceError::Unavailable { .. }));
}

#[rstest]
#[tokio::test]
async fn constraint_violation_on_create_is_unprocessable(latte: DrinkDraft) {
    let mut repo = MockDrinkRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(DrinkRepositoryError::constraint("title too long")));

    let service = DrinksService::new(Arc::new(repo));
    let err = service.create(latte).await.expect_err("insert fails");
    assert!(matches!(err, DrinkServiceError::Unprocessable { .. }));
}

#[rstest]
#[tokio::test]
async fn commit_failure_on_update_is_unprocessable(latte: DrinkDraft) {
    let mut repo = MockDrinkRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(|_, _| Err(DrinkRepositoryError::query("deadlock")));

    let service = DrinksService::new(Arc::new(repo));
    let err = service
        .update(DrinkId::new(1), latte)
        .await
        .expect_err("update fails");
    assert!(matches!(err, DrinkServiceError::Unprocessable { .. }));
}
