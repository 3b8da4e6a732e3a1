//! Predicate statements and evaluation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use smallvec::SmallVec;

use super::options::RollOptions;

const NOT_PREFIX: &str = "not:";

/// One node of a predicate tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Statement {
    /// Tag must be present.
    Atom(String),

    /// Tag must be absent (authored as `not:<tag>`).
    Negated(String),

    /// Every sub-statement must hold.
    And(Vec<Statement>),

    /// At least one sub-statement must hold.
    Or(Vec<Statement>),

    /// Sub-statement must not hold.
    Not(Box<Statement>),

    /// Unrecognized shape, kept verbatim. Never holds.
    Malformed(Value),
}

impl Statement {
    /// Parse a single statement from content JSON.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => match s.strip_prefix(NOT_PREFIX) {
                Some(tag) => Self::Negated(tag.to_string()),
                None => Self::Atom(s.clone()),
            },
            Value::Object(map) if map.len() == 1 => {
                match map.iter().next() {
                    Some((op, Value::Array(items))) if op == "and" => {
                        Self::And(items.iter().map(Self::from_value).collect())
                    }
                    Some((op, Value::Array(items))) if op == "or" => {
                        Self::Or(items.iter().map(Self::from_value).collect())
                    }
                    Some((op, inner)) if op == "not" => {
                        Self::Not(Box::new(Self::from_value(inner)))
                    }
                    _ => Self::Malformed(value.clone()),
                }
            }
            _ => Self::Malformed(value.clone()),
        }
    }

    /// Convert back to the content JSON shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        fn op(name: &str, value: Value) -> Value {
            let mut map = Map::new();
            map.insert(name.to_string(), value);
            Value::Object(map)
        }

        match self {
            Self::Atom(tag) => Value::String(tag.clone()),
            Self::Negated(tag) => Value::String(format!("{NOT_PREFIX}{tag}")),
            Self::And(items) => op("and", Value::Array(items.iter().map(Self::to_value).collect())),
            Self::Or(items) => op("or", Value::Array(items.iter().map(Self::to_value).collect())),
            Self::Not(inner) => op("not", inner.to_value()),
            Self::Malformed(raw) => raw.clone(),
        }
    }

    /// Whether the tree contains no malformed node.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self {
            Self::Atom(_) | Self::Negated(_) => true,
            Self::And(items) | Self::Or(items) => items.iter().all(Self::is_well_formed),
            Self::Not(inner) => inner.is_well_formed(),
            Self::Malformed(_) => false,
        }
    }

    /// Evaluate a well-formed tree against a set of roll options.
    fn evaluate(&self, options: &RollOptions) -> bool {
        match self {
            Self::Atom(tag) => options.contains(tag),
            Self::Negated(tag) => !options.contains(tag),
            Self::And(items) => items.iter().all(|item| item.evaluate(options)),
            Self::Or(items) => items.iter().any(|item| item.evaluate(options)),
            Self::Not(inner) => !inner.evaluate(options),
            Self::Malformed(_) => false,
        }
    }
}

impl From<&str> for Statement {
    fn from(s: &str) -> Self {
        Self::from_value(&Value::String(s.to_string()))
    }
}

/// A conjunction of statements over roll options.
///
/// Predicates are pure: testing never mutates the option set and the
/// result depends only on the tree and the options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub struct Predicate {
    statements: SmallVec<[Statement; 2]>,
}

impl Predicate {
    /// The empty predicate, which always passes.
    #[must_use]
    pub fn always() -> Self {
        Self::default()
    }

    /// Build from explicit statements.
    pub fn new(statements: impl IntoIterator<Item = Statement>) -> Self {
        Self {
            statements: statements.into_iter().collect(),
        }
    }

    /// Predicate requiring a single tag.
    pub fn atom(tag: impl Into<String>) -> Self {
        Self::new([Statement::Atom(tag.into())])
    }

    /// Normalize raw content into a predicate.
    ///
    /// Absent or `null` gives the empty predicate, a string a single atom,
    /// an array a list of statements, and anything else a single statement.
    #[must_use]
    pub fn from_raw(raw: Option<&Value>) -> Self {
        match raw {
            None | Some(Value::Null) => Self::default(),
            Some(Value::Array(items)) => Self::new(items.iter().map(Statement::from_value)),
            Some(other) => Self::new([Statement::from_value(other)]),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Add another required statement.
    #[must_use]
    pub fn and(mut self, statement: Statement) -> Self {
        self.statements.push(statement);
        self
    }

    /// Test against a set of roll options.
    ///
    /// A predicate with a malformed node anywhere fails outright, whatever
    /// the options and wherever the node sits.
    #[must_use]
    pub fn test(&self, options: &RollOptions) -> bool {
        self.statements.iter().all(Statement::is_well_formed)
            && self.statements.iter().all(|statement| statement.evaluate(options))
    }
}

impl From<Value> for Predicate {
    fn from(value: Value) -> Self {
        Self::from_raw(Some(&value))
    }
}

impl From<Predicate> for Value {
    fn from(predicate: Predicate) -> Self {
        Value::Array(predicate.statements.iter().map(Statement::to_value).collect())
    }
}
