//! Numeric rule values.
//!
//! Content may give a number or the word `"rating"`, meaning "read the
//! owning item's rating". The sentinel is parsed once into
//! [`RuleValue::FromItemRating`].

use serde::{Deserialize, Serialize};

use crate::items::Item;

const RATING_SENTINEL: &str = "rating";

/// A number, or a reference to the owning item's rating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawValue", into = "RawValue")]
pub enum RuleValue {
    Literal(i64),
    FromItemRating,
}

impl RuleValue {
    /// Resolve against the owning item. A missing rating reads as 0.
    ///
    /// ```
    /// use d100_engine::items::{Item, ItemId};
    /// use d100_engine::rule_elements::RuleValue;
    ///
    /// let item = Item::new(ItemId::new(1), "Armour of Faith").with_attr("rating", 3i32);
    /// assert_eq!(RuleValue::FromItemRating.resolve(&item), 3);
    /// assert_eq!(RuleValue::Literal(-10).resolve(&item), -10);
    /// ```
    #[must_use]
    pub fn resolve(self, owner: &Item) -> i64 {
        match self {
            Self::Literal(value) => value,
            Self::FromItemRating => owner.rating(),
        }
    }
}

impl Default for RuleValue {
    fn default() -> Self {
        Self::Literal(0)
    }
}

impl From<i64> for RuleValue {
    fn from(value: i64) -> Self {
        Self::Literal(value)
    }
}

/// Wire form: a JSON number or string.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(i64),
    Text(String),
}

impl TryFrom<RawValue> for RuleValue {
    type Error = String;

    fn try_from(raw: RawValue) -> Result<Self, Self::Error> {
        match raw {
            RawValue::Number(value) => Ok(Self::Literal(value)),
            RawValue::Text(text) if text == RATING_SENTINEL => Ok(Self::FromItemRating),
            RawValue::Text(text) => text
                .trim()
                .parse()
                .map(Self::Literal)
                .map_err(|_| format!("expected a number or \"{RATING_SENTINEL}\", got {text:?}")),
        }
    }
}

impl From<RuleValue> for RawValue {
    fn from(value: RuleValue) -> Self {
        match value {
            RuleValue::Literal(value) => Self::Number(value),
            RuleValue::FromItemRating => Self::Text(RATING_SENTINEL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::ItemId;
    use serde_json::json;

    #[test]
    fn test_parse_forms() {
        assert_eq!(serde_json::from_value::<RuleValue>(json!(10)).unwrap(), RuleValue::Literal(10));
        assert_eq!(serde_json::from_value::<RuleValue>(json!(-20)).unwrap(), RuleValue::Literal(-20));
        assert_eq!(serde_json::from_value::<RuleValue>(json!("rating")).unwrap(), RuleValue::FromItemRating);
        assert_eq!(serde_json::from_value::<RuleValue>(json!("15")).unwrap(), RuleValue::Literal(15));
    }

    #[test]
    fn test_reject_garbage() {
        assert!(serde_json::from_value::<RuleValue>(json!("lots")).is_err());
        assert!(serde_json::from_value::<RuleValue>(json!(true)).is_err());
    }

    #[test]
    fn test_serialize_roundtrip_shape() {
        assert_eq!(serde_json::to_value(RuleValue::FromItemRating).unwrap(), json!("rating"));
        assert_eq!(serde_json::to_value(RuleValue::Literal(4)).unwrap(), json!(4));
    }

    #[test]
    fn test_missing_rating_resolves_to_zero() {
        let item = Item::new(ItemId::new(1), "Unrated");
        assert_eq!(RuleValue::FromItemRating.resolve(&item), 0);
    }
}
