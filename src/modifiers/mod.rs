//! Modifiers and their resolution.
//!
//! - [`Modifier`]: a signed contribution to a check, with provenance
//! - [`apply_exclusion_groups`]: same-group, same-sign modifiers compete
//! - [`resolve_modifiers`]: filter, exclude, sum and cap
//!
//! ## Pipeline
//!
//! 1. Drop disabled modifiers
//! 2. Drop modifiers whose predicate fails against the roll options
//! 3. Collapse exclusion groups
//! 4. Sum and clamp to `[-cap, cap]`

mod exclusion;
mod modifier;
mod resolve;

pub use exclusion::apply_exclusion_groups;
pub use modifier::{Modifier, CALLED_SHOT_PENALTY};
pub use resolve::{resolve_modifiers, ModifierResolution};
