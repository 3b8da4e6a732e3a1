//! Items and their attributes.
//!
//! ## Key Types
//!
//! - `ItemId`: Identifier for an owned item
//! - `Item`: Host item record with attributes, rule sources and choices
//! - `AttributeValue`: Loosely typed attribute data

pub mod attributes;
pub mod item;

pub use attributes::{AttributeKey, AttributeValue, Attributes};
pub use item::{Item, ItemId, RATING_ATTRIBUTE};
