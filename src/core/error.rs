//! Error types.
//!
//! Only genuinely exceptional conditions are errors. Unknown rule keys,
//! missing ratings and user cancellation are handled with defaults or
//! `None` and never surface here.

use thiserror::Error;

/// A fault raised while building or running a single rule element.
///
/// The preparation pass logs these and moves on to the next element.
#[derive(Error, Debug)]
pub enum RuleElementError {
    #[error("rule source has no `key` field")]
    MissingKey,

    #[error("malformed {key} rule: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{key} rule on `{item}` has an empty {field}")]
    EmptyField {
        key: &'static str,
        item: String,
        field: &'static str,
    },
}

/// Engine-level errors: configuration and content loading.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("modifier cap must be non-negative, got {0}")]
    InvalidModifierCap(i64),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("rule element error: {0}")]
    RuleElement(#[from] RuleElementError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
