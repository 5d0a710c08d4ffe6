//! Drink records, drafts and their rendered projections.
//!
//! A [`DrinkDraft`] only exists once a payload has passed
//! [`validate_drink_payload`]; storage turns a draft into a [`Drink`] by
//! assigning a [`DrinkId`]. Clients see drinks through one of two
//! projections: [`ShortDrink`] hides ingredient names, [`LongDrink`] shows the
//! full recipe.

mod recipe;
mod validation;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use recipe::{HexColor, Ingredient, RecipeValidationError};
pub use validation::{DrinkValidationError, ValidationErrorKind, validate_drink_payload};

/// Storage-assigned drink identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrinkId(i32);

impl DrinkId {
    /// Wrap a raw identifier.
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Raw identifier value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for DrinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised when constructing a drink title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrinkTitleError {
    /// Title was the empty string.
    #[error("drink title must not be empty")]
    Empty,
}

/// Display title of a drink.
///
/// ## Invariants
/// - Never empty. Whitespace is preserved as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DrinkTitle(String);

impl DrinkTitle {
    /// Validate and wrap a title.
    pub fn new(value: impl Into<String>) -> Result<Self, DrinkTitleError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DrinkTitleError::Empty);
        }
        Ok(Self(value))
    }

    /// Borrow the title text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl TryFrom<String> for DrinkTitle {
    type Error = DrinkTitleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DrinkTitle> for String {
    fn from(value: DrinkTitle) -> Self {
        value.0
    }
}

/// A validated drink that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrinkDraft {
    title: DrinkTitle,
    recipe: Vec<Ingredient>,
}

impl DrinkDraft {
    /// Assemble a draft from already validated parts.
    pub fn new(title: DrinkTitle, recipe: Vec<Ingredient>) -> Self {
        Self { title, recipe }
    }

    /// Draft title.
    pub fn title(&self) -> &DrinkTitle {
        &self.title
    }

    /// Ordered recipe lines.
    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }
}

/// A persisted drink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drink {
    id: DrinkId,
    title: DrinkTitle,
    recipe: Vec<Ingredient>,
}

impl Drink {
    /// Combine a storage identifier with the draft it was created from.
    pub fn from_draft(id: DrinkId, draft: DrinkDraft) -> Self {
        let DrinkDraft { title, recipe } = draft;
        Self { id, title, recipe }
    }

    /// Storage identifier.
    pub fn id(&self) -> DrinkId {
        self.id
    }

    /// Display title.
    pub fn title(&self) -> &DrinkTitle {
        &self.title
    }

    /// Ordered recipe lines.
    pub fn recipe(&self) -> &[Ingredient] {
        &self.recipe
    }

    /// Public projection: colours and parts only.
    pub fn short(&self) -> ShortDrink {
        ShortDrink {
            id: self.id,
            title: self.title.as_str().to_owned(),
            recipe: self
                .recipe
                .iter()
                .map(|ingredient| ShortIngredient {
                    color: ingredient.color().as_str().to_owned(),
                    parts: ingredient.parts(),
                })
                .collect(),
        }
    }

    /// Detailed projection including ingredient names.
    pub fn long(&self) -> LongDrink {
        LongDrink {
            id: self.id,
            title: self.title.as_str().to_owned(),
            recipe: self.recipe.clone(),
        }
    }

    /// Render the requested projection.
    pub fn render(&self, projection: Projection) -> RenderedDrink {
        match projection {
            Projection::Short => RenderedDrink::Short(self.short()),
            Projection::Long => RenderedDrink::Long(self.long()),
        }
    }
}

/// Which subset of drink fields to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// Title and colour/parts per ingredient.
    Short,
    /// Title and the full recipe.
    Long,
}

/// Ingredient as shown in the short projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortIngredient {
    /// Colour code as submitted.
    pub color: String,
    /// Relative quantity.
    pub parts: i64,
}

/// Short projection of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortDrink {
    /// Drink identifier.
    pub id: DrinkId,
    /// Menu title.
    pub title: String,
    /// Ingredients without names.
    pub recipe: Vec<ShortIngredient>,
}

/// Long projection of a drink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongDrink {
    /// Drink identifier.
    pub id: DrinkId,
    /// Menu title.
    pub title: String,
    /// Full ingredient list.
    pub recipe: Vec<Ingredient>,
}

/// A drink rendered in either projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RenderedDrink {
    /// See [`ShortDrink`].
    Short(ShortDrink),
    /// See [`LongDrink`].
    Long(LongDrink),
}
