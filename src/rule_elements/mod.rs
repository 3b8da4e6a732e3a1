//! Rule elements: content-declared effects.
//!
//! Items declare rule elements as JSON objects keyed by `key`. During each
//! preparation pass the registry instantiates them and every element writes
//! its effect into the character's [`Synthetics`](crate::synthetics::Synthetics).
//!
//! | Key | Effect |
//! |-----|--------|
//! | `FlatModifier` | modifier in a domain |
//! | `RollOption` | literal roll option |
//! | `DiceOverride` | dice behaviour for a domain |
//! | `AdjustDegree` | gated degree-of-success adjustment |
//! | `Resistance` | damage resistance |
//! | `AdjustToughness` | toughness addition or multiplier |
//! | `GrantItem` | nothing during preparation |
//! | `ChoiceSet` | `choice:<flag>:<value>` for a stored choice |

mod elements;
mod registry;
mod value;

pub use elements::{
    AdjustDegreeRule, AdjustToughnessRule, Choice, ChoiceSetRule, DiceOverrideRule,
    FlatModifierRule, GrantItemRule, ResistanceRule, RollOptionRule, RuleElement, RuleKind,
};
pub use registry::{PreparationStats, RuleElementRegistry, RuleFactory};
pub use value::RuleValue;
