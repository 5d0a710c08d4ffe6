//! Recipe ingredients and their colour codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Errors raised when constructing recipe values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecipeValidationError {
    /// Colour code was not `#` followed by 3 or 6 hex digits.
    #[error("colour must be # followed by 3 or 6 hex digits, got {value:?}")]
    InvalidColor { value: String },
    /// Ingredient name was empty.
    #[error("ingredient name must not be empty")]
    EmptyName,
}

/// CSS-style hex colour code.
///
/// ## Invariants
/// - Starts with `#`.
/// - Followed by exactly 3 or exactly 6 ASCII hex digits (either case).
///
/// # Examples
/// ```
/// use coffee_shop::domain::HexColor;
///
/// assert!(HexColor::parse("#0000FF").is_ok());
/// assert!(HexColor::parse("#abc").is_ok());
/// assert!(HexColor::parse("#abcd").is_err());
/// assert!(HexColor::parse("blue").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a colour code, preserving the caller's casing.
    pub fn parse(value: &str) -> Result<Self, RecipeValidationError> {
        let digits = value
            .strip_prefix('#')
            .filter(|digits| matches!(digits.len(), 3 | 6))
            .filter(|digits| digits.chars().all(|c| c.is_ascii_hexdigit()));
        match digits {
            Some(_) => Ok(Self(value.to_owned())),
            None => Err(RecipeValidationError::InvalidColor {
                value: value.to_owned(),
            }),
        }
    }

    /// Borrow the colour code.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = RecipeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

/// A single line of a drink recipe.
///
/// Serialises to the long form `{"name", "color", "parts"}`; the recipe
/// column stores exactly this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IngredientDto")]
pub struct Ingredient {
    name: String,
    color: HexColor,
    parts: i64,
}

impl Ingredient {
    /// Construct an ingredient from validated parts.
    pub fn try_new(
        name: impl Into<String>,
        color: HexColor,
        parts: i64,
    ) -> Result<Self, RecipeValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(RecipeValidationError::EmptyName);
        }
        Ok(Self { name, color, parts })
    }

    /// Ingredient name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Colour used when rendering the drink.
    pub fn color(&self) -> &HexColor {
        &self.color
    }

    /// Relative quantity of this ingredient.
    pub fn parts(&self) -> i64 {
        self.parts
    }
}

#[derive(Deserialize)]
struct IngredientDto {
    name: String,
    color: HexColor,
    parts: i64,
}

impl TryFrom<IngredientDto> for Ingredient {
    type Error = RecipeValidationError;

    fn try_from(value: IngredientDto) -> Result<Self, Self::Error> {
        Self::try_new(value.name, value.color, value.parts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("#fff")]
    #[case("#FFF")]
    #[case("#0000FF")]
    #[case("#a1B2c3")]
    fn accepts_three_and_six_digit_codes(#[case] raw: &str) {
        let color = HexColor::parse(raw).expect("valid colour");
        assert_eq!(color.as_str(), raw);
    }

    #[rstest]
    #[case("")]
    #[case("#")]
    #[case("fff")]
    #[case("#ff")]
    #[case("#ffff")]
    #[case("#fffff")]
    #[case("#fffffff")]
    #[case("#ggg")]
    #[case("blue")]
    #[case(" #fff")]
    fn rejects_other_shapes(#[case] raw: &str) {
        let err = HexColor::parse(raw).expect_err("invalid colour");
        assert!(matches!(err, RecipeValidationError::InvalidColor { .. }));
    }

    #[rstest]
    fn ingredient_rejects_empty_name() {
        let color = HexColor::parse("#000").expect("colour");
        let err = Ingredient::try_new("", color, 1).expect_err("empty name");
        assert_eq!(err, RecipeValidationError::EmptyName);
    }

    #[rstest]
    fn ingredient_deserialisation_validates_colour() {
        let result =
            serde_json::from_value::<Ingredient>(json!({"name": "milk", "color": "white", "parts": 1}));
        assert!(result.is_err());
    }
}
