//! Item attributes.
//!
//! Items carry loosely typed data from the host (rating, craftsmanship,
//! weight, qualities). The engine reads integer `rating` only; every other
//! value is kept as loaded so the host gets it back unchanged.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key for accessing item attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for an item attribute.
///
/// Integers are matched first so ratings stay exact. Anything that is not
/// an integer (decimal weights, flags, quality lists) lands in `Other`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Int(i64),
    Other(Value),
}

impl AttributeValue {
    /// The integer value, if this attribute holds one.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            AttributeValue::Other(_) => None,
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(i64::from(v))
    }
}

impl From<Value> for AttributeValue {
    fn from(v: Value) -> Self {
        match v.as_i64() {
            Some(int) => AttributeValue::Int(int),
            None => AttributeValue::Other(v),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Other(Value::String(v.to_string()))
    }
}

/// Collection of attributes.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_integers_read_as_int() {
        assert_eq!(AttributeValue::from(3i32).as_int(), Some(3));
        assert_eq!(AttributeValue::from(json!(3)).as_int(), Some(3));
        assert_eq!(AttributeValue::from(json!(4.5)).as_int(), None);
        assert_eq!(AttributeValue::from("best").as_int(), None);
    }

    #[test]
    fn test_host_attributes_pass_through() {
        let raw = json!({
            "rating": 2,
            "weight": 4.5,
            "twoHanded": true,
            "craftsmanship": "good",
            "qualities": ["reliable", "tearing"],
            "range": {"short": 30, "long": 100}
        });
        let attrs: Attributes = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(attrs.get(&"rating".into()), Some(&AttributeValue::Int(2)));
        assert_eq!(attrs.get(&"weight".into()), Some(&AttributeValue::Other(json!(4.5))));
        assert_eq!(attrs.get(&"qualities".into()).and_then(AttributeValue::as_int), None);

        assert_eq!(serde_json::to_value(&attrs).unwrap(), raw);
    }
}
