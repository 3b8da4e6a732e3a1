//! Predicates over roll options.
//!
//! A predicate gates a modifier or adjustment on facts about the acting
//! character and the current situation. Facts are plain string tags
//! ("roll options") such as `self:aiming` or `target:range:short`.
//!
//! ## Content Shape
//!
//! Predicates are authored as JSON:
//!
//! - `"self:aiming"`: the tag must be present
//! - `"not:self:prone"`: the tag must be absent
//! - `{"and": [...]}` / `{"or": [...]}`: combinators, nestable
//! - `{"not": ...}`: negate any statement
//! - `[...]`: a list of statements, all of which must hold
//!
//! An empty predicate always passes. Anything unrecognized fails closed.
//!
//! ```
//! use d100_engine::predicate::{Predicate, RollOptions};
//! use serde_json::json;
//!
//! let raw = json!(["self:aiming", {"or": ["weapon:las", "weapon:bolt"]}]);
//! let predicate = Predicate::from_raw(Some(&raw));
//!
//! let options = RollOptions::from_iter(["self:aiming", "weapon:las"]);
//! assert!(predicate.test(&options));
//!
//! let options = RollOptions::from_iter(["self:aiming"]);
//! assert!(!predicate.test(&options));
//! ```

mod options;
mod statement;

pub use options::RollOptions;
pub use statement::{Predicate, Statement};
