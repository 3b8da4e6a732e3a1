//! Synthetics: the per-character effect accumulator.
//!
//! Rule elements write into a `Synthetics` once per preparation pass.
//! Checks and derived-data calculations read from it. A new, empty value
//! replaces the old one at the start of every pass; nothing is updated
//! incrementally.
//!
//! ```
//! use d100_engine::core::Domain;
//! use d100_engine::modifiers::Modifier;
//! use d100_engine::synthetics::Synthetics;
//!
//! let mut synthetics = Synthetics::new();
//! synthetics.add_modifier("skill:stealth", Modifier::new("Chameleoline", 20));
//!
//! let sneak = synthetics.modifiers_for(&Domain::new("skill:stealth:sneak"));
//! assert_eq!(sneak.len(), 1);
//! ```

mod entries;

pub use entries::{
    DegreeAdjustment, DiceOverride, DiceOverrideMode, Resistance, ResistanceMode,
    ToughnessAdjustment, ToughnessMode,
};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Domain;
use crate::modifiers::Modifier;
use crate::predicate::RollOptions;

/// Everything the rule elements of one character produced this pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synthetics {
    pub roll_options: RollOptions,
    pub modifiers: FxHashMap<Domain, Vec<Modifier>>,
    pub dos_adjustments: Vec<DegreeAdjustment>,
    pub resistances: Vec<Resistance>,
    pub toughness_adjustments: Vec<ToughnessAdjustment>,
    pub dice_overrides: FxHashMap<Domain, Vec<DiceOverride>>,
}

impl Synthetics {
    /// An empty accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_modifier(&mut self, domain: impl Into<Domain>, modifier: Modifier) {
        self.modifiers.entry(domain.into()).or_default().push(modifier);
    }

    pub fn add_dice_override(&mut self, domain: impl Into<Domain>, dice_override: DiceOverride) {
        self.dice_overrides.entry(domain.into()).or_default().push(dice_override);
    }

    /// Clones of the modifiers that apply to `domain`: its own, then its
    /// parent's for domains deep enough to inherit.
    #[must_use]
    pub fn modifiers_for(&self, domain: &Domain) -> Vec<Modifier> {
        domain
            .lineage()
            .filter_map(|d| self.modifiers.get(&d))
            .flatten()
            .cloned()
            .collect()
    }

    /// Dice overrides for `domain`, inheriting like modifiers.
    #[must_use]
    pub fn dice_overrides_for(&self, domain: &Domain) -> Vec<DiceOverride> {
        domain
            .lineage()
            .filter_map(|d| self.dice_overrides.get(&d))
            .flatten()
            .cloned()
            .collect()
    }

    /// Effective toughness: additions first, then multipliers.
    #[must_use]
    pub fn toughness(&self, base: i64) -> i64 {
        let added = self
            .toughness_adjustments
            .iter()
            .filter(|adj| adj.mode == ToughnessMode::Add)
            .fold(base, |total, adj| total.saturating_add(adj.value));

        self.toughness_adjustments
            .iter()
            .filter(|adj| adj.mode == ToughnessMode::Multiply)
            .fold(added, |total, adj| total.saturating_mul(adj.value))
    }

    /// Damage left after resistances.
    ///
    /// Any matching `half` resistance halves the damage (rounding down),
    /// then matching `flat` values are subtracted. Never below zero.
    #[must_use]
    pub fn apply_resistances(&self, damage_type: &str, amount: i64) -> i64 {
        let matching: Vec<&Resistance> = self
            .resistances
            .iter()
            .filter(|r| r.matches(damage_type))
            .collect();

        let halved = if matching.iter().any(|r| r.mode == ResistanceMode::Half) {
            amount.div_euclid(2)
        } else {
            amount
        };

        let flat = matching
            .iter()
            .filter(|r| r.mode == ResistanceMode::Flat)
            .fold(0, |total: i64, r| total.saturating_add(r.value));

        halved.saturating_sub(flat).max(0)
    }
}
