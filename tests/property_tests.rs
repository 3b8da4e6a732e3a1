//! Property tests for degree arithmetic and modifier resolution.

use d100_engine::check::calculate_dos;
use d100_engine::modifiers::{apply_exclusion_groups, resolve_modifiers, Modifier};
use d100_engine::predicate::RollOptions;
use proptest::prelude::*;

fn modifier_strategy() -> impl Strategy<Value = Modifier> {
    (
        -40i64..=40,
        prop::option::of(prop::sample::select(vec!["aim", "cover", "range"])),
        any::<bool>(),
    )
        .prop_map(|(value, group, enabled)| {
            let mut modifier = Modifier::new(format!("m{value}"), value);
            modifier.exclusion_group = group.map(str::to_string);
            modifier.enabled = enabled;
            modifier
        })
}

proptest! {
    /// Property: an unadjusted result always has at least one degree
    #[test]
    fn prop_degrees_at_least_one(roll in 1i64..=100, target in -50i64..=200) {
        prop_assert!(calculate_dos(roll, target).degrees >= 1);
    }

    /// Property: natural 1 always succeeds, natural 100 always fails
    #[test]
    fn prop_natural_results(target in -50i64..=200) {
        prop_assert!(calculate_dos(1, target).success);
        prop_assert!(!calculate_dos(100, target).success);
    }

    /// Property: away from naturals, success is exactly roll <= target
    #[test]
    fn prop_success_matches_threshold(roll in 2i64..=99, target in 1i64..=100) {
        prop_assert_eq!(calculate_dos(roll, target).success, roll <= target);
    }

    /// Property: adjustments never flip the outcome
    #[test]
    fn prop_adjustment_preserves_success(roll in 1i64..=100, target in 1i64..=100, amount in -20i64..=20) {
        let outcome = calculate_dos(roll, target);
        let adjusted = outcome.adjusted(amount);
        prop_assert_eq!(adjusted.success, outcome.success);
        prop_assert!(adjusted.degrees >= 0);
    }

    /// Property: the resolved total stays within the cap
    #[test]
    fn prop_total_within_cap(
        modifiers in prop::collection::vec(modifier_strategy(), 0..12),
        cap in 0i64..=100
    ) {
        let count = modifiers.len();
        let resolution = resolve_modifiers(modifiers, &RollOptions::new(), cap);
        prop_assert!(resolution.total.abs() <= cap);
        prop_assert_eq!(resolution.all.len(), count);
        prop_assert!(resolution.applied.iter().all(|m| m.enabled));
    }

    /// Property: each group keeps exactly its largest bonus and its largest
    /// penalty, the earliest one on a tie, and survivors keep input order
    #[test]
    fn prop_exclusion_keeps_first_extreme(modifiers in prop::collection::vec(modifier_strategy(), 0..12)) {
        let modifiers: Vec<Modifier> = modifiers
            .into_iter()
            .enumerate()
            .map(|(idx, mut m)| {
                m.label = format!("m{idx}");
                m
            })
            .collect();
        let applied = apply_exclusion_groups(&modifiers);

        for group in ["aim", "cover", "range"] {
            let in_group = |m: &&Modifier| m.exclusion_group.as_deref() == Some(group);

            let bonuses: Vec<&Modifier> = modifiers.iter().filter(in_group).filter(|m| m.value > 0).collect();
            let kept: Vec<&str> = applied.iter().filter(in_group).filter(|m| m.value > 0).map(|m| m.label.as_str()).collect();
            match bonuses.iter().map(|m| m.value).max() {
                None => prop_assert!(kept.is_empty()),
                Some(best) => {
                    let first = bonuses.iter().find(|m| m.value == best).map(|m| m.label.as_str());
                    prop_assert_eq!(kept, first.into_iter().collect::<Vec<_>>());
                }
            }

            let penalties: Vec<&Modifier> = modifiers.iter().filter(in_group).filter(|m| m.value < 0).collect();
            let kept: Vec<&str> = applied.iter().filter(in_group).filter(|m| m.value < 0).map(|m| m.label.as_str()).collect();
            match penalties.iter().map(|m| m.value).min() {
                None => prop_assert!(kept.is_empty()),
                Some(worst) => {
                    let first = penalties.iter().find(|m| m.value == worst).map(|m| m.label.as_str());
                    prop_assert_eq!(kept, first.into_iter().collect::<Vec<_>>());
                }
            }
        }

        let ungrouped_in = modifiers.iter().filter(|m| m.exclusion_group.is_none()).count();
        let ungrouped_out = applied.iter().filter(|m| m.exclusion_group.is_none()).count();
        prop_assert_eq!(ungrouped_in, ungrouped_out);

        let positions: Vec<usize> = applied
            .iter()
            .filter_map(|kept| modifiers.iter().position(|m| m.label == kept.label))
            .collect();
        prop_assert_eq!(positions.len(), applied.len());
        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
