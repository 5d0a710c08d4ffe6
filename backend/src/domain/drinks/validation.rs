//! Validation of inbound drink payloads.
//!
//! The schema is closed: a payload carries exactly `title` and `recipe`.
//! Checks run in a fixed order and the first failure is reported, so the
//! same payload always yields the same error.

use std::fmt;

use serde_json::{Map, Value};

use super::{DrinkDraft, DrinkTitle, HexColor, Ingredient};

const TITLE: &str = "title";
const RECIPE: &str = "recipe";
const NAME: &str = "name";
const COLOR: &str = "color";
const PARTS: &str = "parts";

/// Category of a payload validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A required key is absent.
    MissingField,
    /// A required value is empty.
    EmptyField,
    /// A value does not match its textual format.
    InvalidFormat,
    /// A value has the wrong JSON type.
    InvalidType,
    /// The payload carries a key outside the schema.
    UnexpectedField,
}

impl ValidationErrorKind {
    /// Stable snake-case identifier used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::EmptyField => "empty_field",
            Self::InvalidFormat => "invalid_format",
            Self::InvalidType => "invalid_type",
            Self::UnexpectedField => "unexpected_field",
        }
    }
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected drink payload.
///
/// `field` names the offending key; `ingredient` holds the recipe index when
/// the failure is inside a recipe line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {field}")]
pub struct DrinkValidationError {
    kind: ValidationErrorKind,
    field: String,
    ingredient: Option<usize>,
}

impl DrinkValidationError {
    fn new(kind: ValidationErrorKind, field: impl Into<String>) -> Self {
        Self {
            kind,
            field: field.into(),
            ingredient: None,
        }
    }

    fn at(mut self, index: usize) -> Self {
        self.ingredient = Some(index);
        self
    }

    /// Failure category.
    pub fn kind(&self) -> ValidationErrorKind {
        self.kind
    }

    /// Offending key.
    pub fn field(&self) -> &str {
        self.field.as_str()
    }

    /// Index of the recipe line that failed, if any.
    pub fn ingredient(&self) -> Option<usize> {
        self.ingredient
    }
}

/// Validate a drink payload and produce a typed draft.
///
/// # Examples
/// ```
/// use coffee_shop::domain::{ValidationErrorKind, validate_drink_payload};
/// use serde_json::json;
///
/// let draft = validate_drink_payload(&json!({
///     "title": "Water",
///     "recipe": [{"name": "H2O", "color": "#0000FF", "parts": 1}]
/// }))
/// .expect("valid payload");
/// assert_eq!(draft.title().as_str(), "Water");
///
/// let err = validate_drink_payload(&json!({"title": "", "recipe": []}))
///     .expect_err("empty title");
/// assert_eq!(err.kind(), ValidationErrorKind::EmptyField);
/// assert_eq!(err.field(), "title");
/// ```
pub fn validate_drink_payload(body: &Value) -> Result<DrinkDraft, DrinkValidationError> {
    let fields = body
        .as_object()
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::InvalidType, "body"))?;

    let title = required(fields, TITLE)?;
    let recipe = required(fields, RECIPE)?;
    if let Some(extra) = fields.keys().find(|key| !matches!(key.as_str(), TITLE | RECIPE)) {
        return Err(DrinkValidationError::new(
            ValidationErrorKind::UnexpectedField,
            extra.as_str(),
        ));
    }

    let title = parse_title(title)?;
    let recipe = parse_recipe(recipe)?;
    Ok(DrinkDraft::new(title, recipe))
}

fn required<'a>(fields: &'a Map<String, Value>, key: &str) -> Result<&'a Value, DrinkValidationError> {
    fields
        .get(key)
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::MissingField, key))
}

fn parse_title(value: &Value) -> Result<DrinkTitle, DrinkValidationError> {
    match value {
        Value::Null => Err(DrinkValidationError::new(ValidationErrorKind::EmptyField, TITLE)),
        Value::String(raw) => DrinkTitle::new(raw.as_str())
            .map_err(|_| DrinkValidationError::new(ValidationErrorKind::EmptyField, TITLE)),
        _ => Err(DrinkValidationError::new(ValidationErrorKind::InvalidType, TITLE)),
    }
}

fn parse_recipe(value: &Value) -> Result<Vec<Ingredient>, DrinkValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::InvalidType, RECIPE))?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_ingredient(item).map_err(|err| err.at(index)))
        .collect()
}

fn parse_ingredient(value: &Value) -> Result<Ingredient, DrinkValidationError> {
    let fields = value
        .as_object()
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::InvalidType, RECIPE))?;

    let name = match fields.get(NAME) {
        None => return Err(DrinkValidationError::new(ValidationErrorKind::MissingField, NAME)),
        Some(Value::Null) => {
            return Err(DrinkValidationError::new(ValidationErrorKind::EmptyField, NAME));
        }
        Some(Value::String(name)) if name.is_empty() => {
            return Err(DrinkValidationError::new(ValidationErrorKind::EmptyField, NAME));
        }
        Some(Value::String(name)) => name.as_str(),
        Some(_) => return Err(DrinkValidationError::new(ValidationErrorKind::InvalidType, NAME)),
    };

    let color = fields
        .get(COLOR)
        .and_then(Value::as_str)
        .and_then(|raw| HexColor::parse(raw).ok())
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::InvalidFormat, COLOR))?;

    let parts = fields
        .get(PARTS)
        .and_then(Value::as_i64)
        .ok_or_else(|| DrinkValidationError::new(ValidationErrorKind::InvalidType, PARTS))?;

    Ingredient::try_new(name, color, parts)
        .map_err(|_| DrinkValidationError::new(ValidationErrorKind::EmptyField, NAME))
}
