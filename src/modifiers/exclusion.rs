//! Exclusion-group conflict resolution.
//!
//! Modifiers sharing an exclusion group do not stack with same-signed
//! members of that group: only the largest bonus and the largest penalty
//! survive. A bonus and a penalty in the same group both apply.
//!
//! Zero-valued members neither compete nor survive, except when a zero is
//! the only member of its group. When two candidates tie, the first one in
//! input order wins, so the displayed label is deterministic.

use rustc_hash::FxHashMap;

use super::modifier::Modifier;

/// Winning indices for one exclusion group.
#[derive(Default)]
struct GroupWinners {
    members: usize,
    bonus: Option<usize>,
    penalty: Option<usize>,
}

/// Collapse exclusion groups. Survivors keep their input order.
///
/// ```
/// use d100_engine::modifiers::{apply_exclusion_groups, Modifier};
///
/// let applied = apply_exclusion_groups(&[
///     Modifier::new("Half Aim", 10).with_exclusion_group("aim"),
///     Modifier::new("Full Aim", 20).with_exclusion_group("aim"),
///     Modifier::new("Good Craftsmanship", 5),
/// ]);
///
/// let labels: Vec<_> = applied.iter().map(|m| m.label.as_str()).collect();
/// assert_eq!(labels, ["Full Aim", "Good Craftsmanship"]);
/// ```
#[must_use]
pub fn apply_exclusion_groups(modifiers: &[Modifier]) -> Vec<Modifier> {
    let mut groups: FxHashMap<&str, GroupWinners> = FxHashMap::default();

    for (idx, modifier) in modifiers.iter().enumerate() {
        let Some(group) = modifier.exclusion_group.as_deref() else {
            continue;
        };
        let winners = groups.entry(group).or_default();
        winners.members += 1;

        // Strict comparisons keep the earliest of equal candidates.
        if modifier.is_bonus() {
            match winners.bonus {
                Some(best) if modifiers[best].value >= modifier.value => {}
                _ => winners.bonus = Some(idx),
            }
        } else if modifier.is_penalty() {
            match winners.penalty {
                Some(worst) if modifiers[worst].value <= modifier.value => {}
                _ => winners.penalty = Some(idx),
            }
        }
    }

    modifiers
        .iter()
        .enumerate()
        .filter(|(idx, modifier)| match modifier.exclusion_group.as_deref() {
            None => true,
            Some(group) => {
                let winners = &groups[group];
                if modifier.value == 0 {
                    winners.members == 1
                } else {
                    winners.bonus == Some(*idx) || winners.penalty == Some(*idx)
                }
            }
        })
        .map(|(_, modifier)| modifier.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped(label: &str, value: i64, group: &str) -> Modifier {
        Modifier::new(label, value).with_exclusion_group(group)
    }

    fn values(modifiers: &[Modifier]) -> Vec<i64> {
        modifiers.iter().map(|m| m.value).collect()
    }

    #[test]
    fn test_ungrouped_stack() {
        let input = vec![Modifier::new("a", 10), Modifier::new("b", 10), Modifier::new("c", -5)];
        assert_eq!(apply_exclusion_groups(&input), input);
    }

    #[test]
    fn test_bonuses_compete() {
        let applied = apply_exclusion_groups(&[grouped("a", 10, "aim"), grouped("b", 20, "aim")]);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].value, 20);
    }

    #[test]
    fn test_penalties_compete() {
        let applied = apply_exclusion_groups(&[grouped("a", -5, "cover"), grouped("b", -20, "cover")]);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].value, -20);
    }

    #[test]
    fn test_bonus_and_penalty_both_apply() {
        let applied = apply_exclusion_groups(&[grouped("a", 10, "g"), grouped("b", -10, "g")]);
        assert_eq!(values(&applied), vec![10, -10]);
    }

    #[test]
    fn test_groups_are_independent() {
        let applied = apply_exclusion_groups(&[
            grouped("a", 10, "aim"),
            grouped("b", 30, "sight"),
            grouped("c", 20, "aim"),
            grouped("d", 10, "sight"),
        ]);
        assert_eq!(values(&applied), vec![30, 20]);
    }

    #[test]
    fn test_tie_keeps_first_occurrence() {
        let applied = apply_exclusion_groups(&[
            grouped("first", 10, "aim"),
            grouped("second", 10, "aim"),
        ]);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].label, "first");

        let applied = apply_exclusion_groups(&[
            grouped("first", -10, "fear"),
            grouped("second", -10, "fear"),
        ]);
        assert_eq!(applied[0].label, "first");
    }

    #[test]
    fn test_zero_members() {
        // A lone zero survives.
        let applied = apply_exclusion_groups(&[grouped("zero", 0, "g")]);
        assert_eq!(applied.len(), 1);

        // A zero alongside other members is dropped.
        let applied = apply_exclusion_groups(&[grouped("zero", 0, "g"), grouped("b", 10, "g")]);
        assert_eq!(values(&applied), vec![10]);

        // Two zeros: neither is the only member.
        let applied = apply_exclusion_groups(&[grouped("z1", 0, "g"), grouped("z2", 0, "g")]);
        assert!(applied.is_empty());

        // Ungrouped zeros pass through.
        let applied = apply_exclusion_groups(&[Modifier::new("z", 0)]);
        assert_eq!(applied.len(), 1);
    }

    #[test]
    fn test_preserves_input_order() {
        let applied = apply_exclusion_groups(&[
            Modifier::new("x", 5),
            grouped("a", 10, "g"),
            Modifier::new("y", -5),
            grouped("b", 20, "g"),
        ]);
        let labels: Vec<_> = applied.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, vec!["x", "y", "b"]);
    }
}
