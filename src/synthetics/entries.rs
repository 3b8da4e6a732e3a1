//! Entries rule elements write into Synthetics.

use serde::{Deserialize, Serialize};

use crate::predicate::{Predicate, RollOptions};

/// Degree-of-success adjustment gated by a predicate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DegreeAdjustment {
    pub amount: i64,
    pub predicate: Predicate,
    pub source: String,
}

impl DegreeAdjustment {
    #[must_use]
    pub fn applies(&self, options: &RollOptions) -> bool {
        self.predicate.test(options)
    }
}

/// How a resistance reduces damage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResistanceMode {
    /// Subtract `value`.
    #[default]
    Flat,
    /// Halve the damage, rounding down.
    Half,
}

/// Damage resistance against one damage type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resistance {
    /// Damage type, or [`Resistance::ALL_TYPES`].
    pub damage_type: String,
    pub value: i64,
    pub mode: ResistanceMode,
    pub source: String,
}

impl Resistance {
    /// Damage type that matches every incoming type.
    pub const ALL_TYPES: &'static str = "all";

    #[must_use]
    pub fn matches(&self, damage_type: &str) -> bool {
        self.damage_type == Self::ALL_TYPES || self.damage_type.eq_ignore_ascii_case(damage_type)
    }
}

/// How a toughness adjustment combines with the base.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToughnessMode {
    #[default]
    Add,
    Multiply,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToughnessAdjustment {
    pub value: i64,
    pub mode: ToughnessMode,
    pub source: String,
}

/// Dice behaviour overrides consumed by damage rolling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DiceOverrideMode {
    /// Reroll the lowest die and keep the new result.
    RerollLowest,
    /// Every die shows its maximum.
    Maximize,
    /// Every die shows its minimum.
    Minimize,
    /// Host-defined behaviour, passed through untouched.
    Custom(String),
}

impl DiceOverrideMode {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RerollLowest => "reroll-lowest",
            Self::Maximize => "maximize",
            Self::Minimize => "minimize",
            Self::Custom(mode) => mode,
        }
    }
}

impl From<String> for DiceOverrideMode {
    fn from(mode: String) -> Self {
        match mode.as_str() {
            "reroll-lowest" | "rerollLowest" => Self::RerollLowest,
            "maximize" => Self::Maximize,
            "minimize" => Self::Minimize,
            _ => Self::Custom(mode),
        }
    }
}

impl From<DiceOverrideMode> for String {
    fn from(mode: DiceOverrideMode) -> Self {
        mode.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceOverride {
    pub mode: DiceOverrideMode,
    pub source: String,
}
