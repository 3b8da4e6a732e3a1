//! Rule element variants.
//!
//! Each variant is a plain struct deserialized from its content source.
//! [`RuleKind`] closes over all of them, and [`RuleElement`] binds a kind
//! to the item that declared it.

use serde::{Deserialize, Serialize};

use crate::core::error::RuleElementError;
use crate::core::Domain;
use crate::items::{Item, ItemId};
use crate::modifiers::Modifier;
use crate::predicate::Predicate;
use crate::synthetics::{
    DegreeAdjustment, DiceOverride, DiceOverrideMode, Resistance, ResistanceMode, Synthetics,
    ToughnessAdjustment, ToughnessMode,
};

use super::value::RuleValue;

/// Adds a modifier to every check in `domain`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatModifierRule {
    pub domain: Domain,
    pub value: RuleValue,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub predicate: Predicate,
    #[serde(default)]
    pub exclusion_group: Option<String>,
    #[serde(default)]
    pub toggleable: bool,
}

/// Adds a literal roll option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollOptionRule {
    pub option: String,
}

/// Changes how dice in `domain` are rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceOverrideRule {
    pub domain: Domain,
    pub mode: DiceOverrideMode,
}

/// Adds to (or subtracts from) the degrees of a check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdjustDegreeRule {
    pub amount: i64,
    #[serde(default)]
    pub predicate: Predicate,
}

/// Resists one damage type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResistanceRule {
    pub damage_type: String,
    #[serde(default)]
    pub value: Option<RuleValue>,
    #[serde(default)]
    pub mode: ResistanceMode,
}

/// Adds to or multiplies toughness.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustToughnessRule {
    pub value: RuleValue,
    #[serde(default)]
    pub mode: ToughnessMode,
}

/// Grants another item. Granting creates documents in the host, so it
/// happens outside the preparation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrantItemRule {
    pub uuid: String,
}

/// One option offered by a [`ChoiceSetRule`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Choice {
    Value(String),
    Labeled { value: String, label: String },
}

impl Choice {
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Value(value) | Self::Labeled { value, .. } => value,
        }
    }
}

/// A choice made once and stored on the item, exposed as a roll option.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceSetRule {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub flag: String,
}

impl ChoiceSetRule {
    /// Roll option emitted for a stored choice.
    #[must_use]
    pub fn option_for(&self, stored: &str) -> String {
        format!("choice:{}:{}", self.flag, stored)
    }
}

/// The closed set of rule element kinds.
#[derive(Clone, Debug, PartialEq)]
pub enum RuleKind {
    FlatModifier(FlatModifierRule),
    RollOption(RollOptionRule),
    DiceOverride(DiceOverrideRule),
    AdjustDegree(AdjustDegreeRule),
    Resistance(ResistanceRule),
    AdjustToughness(AdjustToughnessRule),
    GrantItem(GrantItemRule),
    ChoiceSet(ChoiceSetRule),
}

macro_rules! impl_from_rule {
    ($($variant:ident($rule:ty)),* $(,)?) => {
        $(
            impl From<$rule> for RuleKind {
                fn from(rule: $rule) -> Self {
                    Self::$variant(rule)
                }
            }
        )*
    };
}

impl_from_rule!(
    FlatModifier(FlatModifierRule),
    RollOption(RollOptionRule),
    DiceOverride(DiceOverrideRule),
    AdjustDegree(AdjustDegreeRule),
    Resistance(ResistanceRule),
    AdjustToughness(AdjustToughnessRule),
    GrantItem(GrantItemRule),
    ChoiceSet(ChoiceSetRule),
);

impl RuleKind {
    /// The content key for this kind.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::FlatModifier(_) => "FlatModifier",
            Self::RollOption(_) => "RollOption",
            Self::DiceOverride(_) => "DiceOverride",
            Self::AdjustDegree(_) => "AdjustDegree",
            Self::Resistance(_) => "Resistance",
            Self::AdjustToughness(_) => "AdjustToughness",
            Self::GrantItem(_) => "GrantItem",
            Self::ChoiceSet(_) => "ChoiceSet",
        }
    }
}

/// A rule element bound to the item that declared it.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    /// The owning item.
    pub owner: ItemId,
    /// Content label, or the owning item's name.
    pub label: String,
    pub kind: RuleKind,
}

impl RuleElement {
    pub fn new(owner: &Item, label: Option<String>, kind: RuleKind) -> Self {
        Self {
            owner: owner.id,
            label: label.unwrap_or_else(|| owner.name.clone()),
            kind,
        }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.kind.key()
    }

    /// Write this element's effect into `synthetics`.
    ///
    /// Reads nothing from `owner` beyond its rating and stored choices.
    pub fn on_prepare_data(&self, owner: &Item, synthetics: &mut Synthetics) -> Result<(), RuleElementError> {
        let empty = |field: &'static str| RuleElementError::EmptyField {
            key: self.key(),
            item: owner.name.clone(),
            field,
        };

        match &self.kind {
            RuleKind::FlatModifier(rule) => {
                if rule.domain.is_empty() {
                    return Err(empty("domain"));
                }
                let mut modifier = Modifier::new(self.label.clone(), rule.value.resolve(owner))
                    .with_source(rule.source.clone().unwrap_or_else(|| owner.name.clone()))
                    .with_predicate(rule.predicate.clone());
                modifier.exclusion_group = rule.exclusion_group.clone();
                modifier.toggleable = rule.toggleable;
                synthetics.add_modifier(rule.domain.clone(), modifier);
            }

            RuleKind::RollOption(rule) => {
                if rule.option.is_empty() {
                    return Err(empty("option"));
                }
                synthetics.roll_options.insert(rule.option.clone());
            }

            RuleKind::DiceOverride(rule) => {
                if rule.domain.is_empty() {
                    return Err(empty("domain"));
                }
                synthetics.add_dice_override(
                    rule.domain.clone(),
                    DiceOverride {
                        mode: rule.mode.clone(),
                        source: self.label.clone(),
                    },
                );
            }

            RuleKind::AdjustDegree(rule) => {
                synthetics.dos_adjustments.push(DegreeAdjustment {
                    amount: rule.amount,
                    predicate: rule.predicate.clone(),
                    source: self.label.clone(),
                });
            }

            RuleKind::Resistance(rule) => {
                if rule.damage_type.is_empty() {
                    return Err(empty("damageType"));
                }
                synthetics.resistances.push(Resistance {
                    damage_type: rule.damage_type.clone(),
                    value: rule.value.unwrap_or_default().resolve(owner),
                    mode: rule.mode,
                    source: self.label.clone(),
                });
            }

            RuleKind::AdjustToughness(rule) => {
                synthetics.toughness_adjustments.push(ToughnessAdjustment {
                    value: rule.value.resolve(owner),
                    mode: rule.mode,
                    source: self.label.clone(),
                });
            }

            RuleKind::GrantItem(_) => {}

            RuleKind::ChoiceSet(rule) => {
                if rule.flag.is_empty() {
                    return Err(empty("flag"));
                }
                if let Some(stored) = owner.choice(&rule.flag) {
                    synthetics.roll_options.insert(rule.option_for(stored));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bind(owner: &Item, kind: impl Into<RuleKind>) -> RuleElement {
        RuleElement::new(owner, None, kind.into())
    }

    fn parse<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> T {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_flat_modifier() {
        let owner = Item::new(ItemId::new(1), "Deadeye Shot");
        let rule: FlatModifierRule = parse(json!({
            "key": "FlatModifier",
            "domain": "characteristic:bs",
            "value": 10,
            "exclusionGroup": "aim",
            "predicate": "self:aiming"
        }));
        let mut synthetics = Synthetics::new();
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();

        let modifiers = &synthetics.modifiers[&Domain::new("characteristic:bs")];
        assert_eq!(modifiers.len(), 1);
        assert_eq!(modifiers[0].label, "Deadeye Shot");
        assert_eq!(modifiers[0].source, "Deadeye Shot");
        assert_eq!(modifiers[0].value, 10);
        assert_eq!(modifiers[0].exclusion_group.as_deref(), Some("aim"));
        assert!(!modifiers[0].predicate.is_empty());
    }

    #[test]
    fn test_flat_modifier_rating() {
        let owner = Item::new(ItemId::new(1), "Resistance (Fear)").with_attr("rating", 2i32);
        let rule: FlatModifierRule = parse(json!({"domain": "fear", "value": "rating"}));
        let mut synthetics = Synthetics::new();
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();

        assert_eq!(synthetics.modifiers[&Domain::new("fear")][0].value, 2);
    }

    #[test]
    fn test_flat_modifier_empty_domain() {
        let owner = Item::new(ItemId::new(1), "Broken");
        let rule: FlatModifierRule = parse(json!({"domain": "", "value": 5}));
        let mut synthetics = Synthetics::new();

        let err = bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap_err();
        assert!(matches!(err, RuleElementError::EmptyField { field: "domain", .. }));
        assert!(synthetics.modifiers.is_empty());
    }

    #[test]
    fn test_roll_option() {
        let owner = Item::new(ItemId::new(1), "Stunned");
        let mut synthetics = Synthetics::new();
        bind(&owner, RollOptionRule { option: "self:stunned".to_string() })
            .on_prepare_data(&owner, &mut synthetics)
            .unwrap();

        assert!(synthetics.roll_options.contains("self:stunned"));
    }

    #[test]
    fn test_dice_override_uses_label() {
        let owner = Item::new(ItemId::new(1), "Crushing Blow");
        let rule: DiceOverrideRule = parse(json!({"domain": "damage:melee", "mode": "reroll-lowest"}));
        let element = RuleElement::new(&owner, Some("Brutal".to_string()), rule.into());
        let mut synthetics = Synthetics::new();
        element.on_prepare_data(&owner, &mut synthetics).unwrap();

        let overrides = &synthetics.dice_overrides[&Domain::new("damage:melee")];
        assert_eq!(overrides[0].mode, DiceOverrideMode::RerollLowest);
        assert_eq!(overrides[0].source, "Brutal");
    }

    #[test]
    fn test_adjust_degree() {
        let owner = Item::new(ItemId::new(1), "Marksman");
        let rule: AdjustDegreeRule = parse(json!({"amount": 1, "predicate": ["self:aiming"]}));
        let mut synthetics = Synthetics::new();
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();

        assert_eq!(synthetics.dos_adjustments.len(), 1);
        assert_eq!(synthetics.dos_adjustments[0].amount, 1);
        assert_eq!(synthetics.dos_adjustments[0].source, "Marksman");
    }

    #[test]
    fn test_resistance_defaults() {
        let owner = Item::new(ItemId::new(1), "Flak Cloak");
        let rule: ResistanceRule = parse(json!({"damageType": "energy"}));
        assert_eq!(rule.mode, ResistanceMode::Flat);

        let mut synthetics = Synthetics::new();
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();
        assert_eq!(synthetics.resistances[0].value, 0);

        let rule: ResistanceRule = parse(json!({"damageType": "fire", "mode": "half"}));
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();
        assert_eq!(synthetics.resistances[1].mode, ResistanceMode::Half);
    }

    #[test]
    fn test_adjust_toughness() {
        let owner = Item::new(ItemId::new(1), "Iron Jaw").with_attr("rating", 3i32);
        let rule: AdjustToughnessRule = parse(json!({"value": "rating", "mode": "multiply"}));
        let mut synthetics = Synthetics::new();
        bind(&owner, rule).on_prepare_data(&owner, &mut synthetics).unwrap();

        assert_eq!(synthetics.toughness_adjustments[0].value, 3);
        assert_eq!(synthetics.toughness_adjustments[0].mode, ToughnessMode::Multiply);
    }

    #[test]
    fn test_grant_item_is_noop() {
        let owner = Item::new(ItemId::new(1), "Psyker");
        let mut synthetics = Synthetics::new();
        bind(&owner, GrantItemRule { uuid: "Compendium.powers.Smite".to_string() })
            .on_prepare_data(&owner, &mut synthetics)
            .unwrap();

        assert_eq!(synthetics, Synthetics::new());
    }

    #[test]
    fn test_choice_set() {
        let rule: ChoiceSetRule = parse(json!({
            "prompt": "Choose a weapon group",
            "choices": ["las", {"value": "bolt", "label": "Bolt"}],
            "flag": "weaponTraining"
        }));
        assert_eq!(rule.choices[1].value(), "bolt");

        let unchosen = Item::new(ItemId::new(1), "Weapon Training");
        let mut synthetics = Synthetics::new();
        bind(&unchosen, rule.clone()).on_prepare_data(&unchosen, &mut synthetics).unwrap();
        assert!(synthetics.roll_options.is_empty());

        let chosen = unchosen.clone().with_choice("weaponTraining", "bolt");
        bind(&chosen, rule).on_prepare_data(&chosen, &mut synthetics).unwrap();
        assert!(synthetics.roll_options.contains("choice:weaponTraining:bolt"));
    }
}
