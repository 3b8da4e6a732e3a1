//! Items: the owners of rule elements.
//!
//! Talents, traits, conditions and gear are all items. Each declares zero
//! or more rule element sources as raw JSON; the registry decides at
//! preparation time which of them it understands.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::attributes::{AttributeKey, AttributeValue, Attributes};

/// Attribute read when a rule uses the `"rating"` value.
pub const RATING_ATTRIBUTE: &str = "rating";

/// Identifier of an item owned by an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Item({})", self.0)
    }
}

/// An item owned by an actor.
///
/// ```
/// use d100_engine::items::{Item, ItemId};
/// use serde_json::json;
///
/// let item = Item::new(ItemId::new(1), "Resistance (Fear)")
///     .with_attr("rating", 2i32)
///     .with_rule(json!({"key": "FlatModifier", "domain": "fear", "value": "rating"}));
///
/// assert_eq!(item.rating(), 2);
/// assert_eq!(item.rules.len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,

    pub name: String,

    #[serde(default)]
    pub attributes: Attributes,

    /// Rule element sources, kept raw so unknown keys survive loading.
    #[serde(default)]
    pub rules: Vec<Value>,

    /// Choices made for `ChoiceSet` rules, keyed by flag.
    #[serde(default)]
    pub choices: FxHashMap<String, String>,
}

impl Item {
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_attr(mut self, key: impl Into<AttributeKey>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_rule(mut self, source: Value) -> Self {
        self.rules.push(source);
        self
    }

    /// Record a choice for a `ChoiceSet` flag.
    #[must_use]
    pub fn with_choice(mut self, flag: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.insert(flag.into(), value.into());
        self
    }

    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&AttributeValue> {
        self.attributes.get(&AttributeKey::new(key))
    }

    #[must_use]
    pub fn get_int(&self, key: &str, default: i64) -> i64 {
        self.get_attr(key).and_then(AttributeValue::as_int).unwrap_or(default)
    }

    /// The item's rating, or 0 when it has none.
    #[must_use]
    pub fn rating(&self) -> i64 {
        self.get_int(RATING_ATTRIBUTE, 0)
    }

    /// The stored choice for a `ChoiceSet` flag.
    #[must_use]
    pub fn choice(&self, flag: &str) -> Option<&str> {
        self.choices.get(flag).map(String::as_str)
    }
}
