//! Core engine types: domains, dice, configuration, errors.
//!
//! Everything here is independent of rule content. Higher modules build on
//! these types rather than on each other where they can.

pub mod config;
pub mod domain;
pub mod error;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_MODIFIER_CAP};
pub use domain::Domain;
pub use error::{EngineError, Result, RuleElementError};
pub use rng::{DiceRng, DieRoller, FixedRolls};
