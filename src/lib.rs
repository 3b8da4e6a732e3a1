//! # d100-engine
//!
//! A rules engine for percentile (d100) tabletop systems.
//!
//! ## Design Principles
//!
//! 1. **Content-Driven**: Items carry rule elements as plain JSON. The
//!    engine interprets them; nothing about a specific talent or weapon is
//!    hardcoded.
//!
//! 2. **Derived Data Is Rebuilt**: An actor's Synthetics are recomputed from
//!    scratch on every preparation pass. Nothing accumulates between passes.
//!
//! 3. **Checks Own Their Inputs**: A pending check works on clones, so a
//!    confirmation dialog can toggle modifiers without touching the actor.
//!
//! ## Data Flow
//!
//! ```text
//! Item.rules (JSON) -> RuleElementRegistry -> RuleElement
//!                   -> on_prepare_data -> Synthetics
//! CheckContext + Synthetics -> PendingCheck -> (dialog) -> roll -> CheckResult
//! ```
//!
//! ## Modules
//!
//! - `core`: Domains, dice, configuration, errors
//! - `predicate`: Roll options and predicate trees
//! - `modifiers`: Modifiers, exclusion groups, capped totals
//! - `items`: Items and their attributes
//! - `synthetics`: Per-actor derived rule output
//! - `rule_elements`: Rule element kinds and their registry
//! - `actor`: Actors and the preparation pass
//! - `check`: d100 checks and degrees of success

pub mod core;
pub mod predicate;
pub mod modifiers;
pub mod items;
pub mod synthetics;
pub mod rule_elements;
pub mod actor;
pub mod check;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DieRoller, Domain, EngineConfig, EngineError, FixedRolls,
    RuleElementError,
};

pub use crate::predicate::{Predicate, RollOptions, Statement};

pub use crate::modifiers::{apply_exclusion_groups, resolve_modifiers, Modifier, ModifierResolution};

pub use crate::items::{AttributeKey, AttributeValue, Attributes, Item, ItemId};

pub use crate::synthetics::Synthetics;

pub use crate::rule_elements::{PreparationStats, RuleElement, RuleElementRegistry, RuleKind, RuleValue};

pub use crate::actor::{Actor, ActorId};

pub use crate::check::{
    calculate_dos, AutoConfirm, ChatLog, CheckContext, CheckDialog, CheckEngine, CheckReporter,
    CheckResult, DegreeOutcome, DialogOutcome, PendingCheck,
};
