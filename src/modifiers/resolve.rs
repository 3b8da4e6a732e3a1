//! Modifier resolution pipeline.

use serde::{Deserialize, Serialize};

use crate::predicate::RollOptions;

use super::exclusion::apply_exclusion_groups;
use super::modifier::Modifier;

/// Outcome of resolving a modifier list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModifierResolution {
    /// Sum of applied values, clamped into `[-cap, cap]`.
    pub total: i64,
    /// Modifiers that survived filtering and exclusion, for display.
    pub applied: Vec<Modifier>,
    /// The input list, untouched, for audit and toggling.
    pub all: Vec<Modifier>,
}

impl ModifierResolution {
    /// Sum of applied values before capping.
    #[must_use]
    pub fn uncapped_total(&self) -> i64 {
        self.applied.iter().map(|m| m.value).fold(0, i64::saturating_add)
    }

    /// Whether the cap changed the total.
    #[must_use]
    pub fn was_capped(&self) -> bool {
        self.uncapped_total() != self.total
    }
}

/// Filter, collapse exclusion groups, sum and clamp.
///
/// ```
/// use d100_engine::modifiers::{resolve_modifiers, Modifier};
/// use d100_engine::predicate::{Predicate, RollOptions};
///
/// let modifiers = vec![
///     Modifier::new("Full Aim", 20).with_exclusion_group("aim"),
///     Modifier::new("Half Aim", 10).with_exclusion_group("aim"),
///     Modifier::new("Darkness", -20).with_predicate(Predicate::atom("env:dark")),
///     Modifier::new("Stunned", -30).disabled(),
/// ];
///
/// let resolution = resolve_modifiers(modifiers, &RollOptions::new(), 60);
/// assert_eq!(resolution.total, 20);
/// assert_eq!(resolution.applied.len(), 1);
/// assert_eq!(resolution.all.len(), 4);
/// ```
#[must_use]
pub fn resolve_modifiers(modifiers: Vec<Modifier>, options: &RollOptions, cap: i64) -> ModifierResolution {
    let cap = cap.max(0);

    let active: Vec<Modifier> = modifiers
        .iter()
        .filter(|m| m.enabled)
        .filter(|m| m.predicate.test(options))
        .cloned()
        .collect();

    let applied = apply_exclusion_groups(&active);
    let total = applied
        .iter()
        .map(|m| m.value)
        .fold(0i64, i64::saturating_add)
        .clamp(-cap, cap);

    ModifierResolution {
        total,
        applied,
        all: modifiers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    #[test]
    fn test_empty() {
        let resolution = resolve_modifiers(Vec::new(), &RollOptions::new(), 60);
        assert_eq!(resolution.total, 0);
        assert!(resolution.applied.is_empty());
        assert!(resolution.all.is_empty());
    }

    #[test]
    fn test_disabled_never_count() {
        let resolution = resolve_modifiers(
            vec![Modifier::new("a", 10).disabled(), Modifier::new("b", 5)],
            &RollOptions::new(),
            60,
        );
        assert_eq!(resolution.total, 5);
        assert_eq!(resolution.all.len(), 2);
    }

    #[test]
    fn test_predicate_filtering() {
        let gated = Modifier::new("Night Vision", 10).with_predicate(Predicate::atom("env:dark"));

        let resolution = resolve_modifiers(vec![gated.clone()], &RollOptions::new(), 60);
        assert_eq!(resolution.total, 0);

        let resolution = resolve_modifiers(vec![gated], &RollOptions::from_iter(["env:dark"]), 60);
        assert_eq!(resolution.total, 10);
    }

    #[test]
    fn test_disabled_loses_exclusion_contest() {
        // A disabled member is removed before exclusion, so it cannot
        // suppress a smaller enabled bonus.
        let resolution = resolve_modifiers(
            vec![
                Modifier::new("big", 30).with_exclusion_group("g").disabled(),
                Modifier::new("small", 10).with_exclusion_group("g"),
            ],
            &RollOptions::new(),
            60,
        );
        assert_eq!(resolution.total, 10);
    }

    #[test]
    fn test_cap() {
        let big = vec![Modifier::new("a", 50), Modifier::new("b", 40)];
        let resolution = resolve_modifiers(big, &RollOptions::new(), 60);
        assert_eq!(resolution.total, 60);
        assert_eq!(resolution.uncapped_total(), 90);
        assert!(resolution.was_capped());

        let low = vec![Modifier::new("a", -50), Modifier::new("b", -40)];
        assert_eq!(resolve_modifiers(low, &RollOptions::new(), 60).total, -60);

        let custom = vec![Modifier::new("a", 25)];
        assert_eq!(resolve_modifiers(custom, &RollOptions::new(), 10).total, 10);
    }

    #[test]
    fn test_all_is_untouched() {
        let input = vec![
            Modifier::new("a", 10).with_exclusion_group("g"),
            Modifier::new("b", 20).with_exclusion_group("g"),
            Modifier::new("c", 5).disabled(),
        ];
        let resolution = resolve_modifiers(input.clone(), &RollOptions::new(), 60);
        assert_eq!(resolution.all, input);
    }
}
