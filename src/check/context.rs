//! Check inputs.

use crate::actor::Actor;
use crate::core::Domain;
use crate::modifiers::Modifier;
use crate::predicate::RollOptions;

/// Everything needed to run one check.
///
/// ```
/// use d100_engine::actor::{Actor, ActorId};
/// use d100_engine::check::CheckContext;
/// use d100_engine::modifiers::Modifier;
///
/// let actor = Actor::new(ActorId::new(1), "Vell").with_characteristic("bs", 38);
/// let context = CheckContext::characteristic(&actor, "bs", "Ballistic Skill")
///     .with_modifier(Modifier::new("Short Range", 10))
///     .skip_dialog();
///
/// assert_eq!(context.base_target, 38);
/// assert_eq!(context.domain.as_str(), "characteristic:bs");
/// ```
#[derive(Clone, Debug)]
pub struct CheckContext<'a> {
    pub actor: &'a Actor,
    pub base_target: i64,
    pub label: String,
    pub domain: Domain,
    /// Situational modifiers on top of the actor's Synthetics.
    pub modifiers: Vec<Modifier>,
    /// Situational roll options on top of the actor's Synthetics.
    pub roll_options: RollOptions,
    /// Characteristic tested, exposed as `self:characteristic:<key>`.
    pub characteristic: Option<String>,
    /// Skill tested, exposed as `self:skill:<key>`.
    pub skill: Option<String>,
    pub skip_dialog: bool,
}

impl<'a> CheckContext<'a> {
    pub fn new(actor: &'a Actor, base_target: i64, label: impl Into<String>, domain: impl Into<Domain>) -> Self {
        Self {
            actor,
            base_target,
            label: label.into(),
            domain: domain.into(),
            modifiers: Vec::new(),
            roll_options: RollOptions::new(),
            characteristic: None,
            skill: None,
            skip_dialog: false,
        }
    }

    /// A characteristic test in the `characteristic:<key>` domain.
    pub fn characteristic(actor: &'a Actor, key: &str, label: impl Into<String>) -> Self {
        Self::new(actor, actor.characteristic(key), label, format!("characteristic:{key}"))
            .with_characteristic(key)
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: Modifier) -> Self {
        self.modifiers.push(modifier);
        self
    }

    #[must_use]
    pub fn with_roll_option(mut self, option: impl Into<String>) -> Self {
        self.roll_options.insert(option);
        self
    }

    #[must_use]
    pub fn with_characteristic(mut self, key: impl Into<String>) -> Self {
        self.characteristic = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_skill(mut self, key: impl Into<String>) -> Self {
        self.skill = Some(key.into());
        self
    }

    #[must_use]
    pub fn skip_dialog(mut self) -> Self {
        self.skip_dialog = true;
        self
    }

    /// Roll options derived from the context itself.
    #[must_use]
    pub fn derived_options(&self) -> RollOptions {
        let mut options = RollOptions::from_iter(["self:check".to_string(), format!("check:domain:{}", self.domain)]);
        if let Some(key) = &self.characteristic {
            options.insert(format!("self:characteristic:{key}"));
        }
        if let Some(key) = &self.skill {
            options.insert(format!("self:skill:{key}"));
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorId;

    #[test]
    fn test_derived_options() {
        let actor = Actor::new(ActorId::new(1), "Vell").with_characteristic("ag", 40);
        let context = CheckContext::characteristic(&actor, "ag", "Agility").with_skill("acrobatics");

        let options = context.derived_options();
        assert_eq!(
            options.sorted(),
            vec![
                "check:domain:characteristic:ag",
                "self:characteristic:ag",
                "self:check",
                "self:skill:acrobatics",
            ]
        );
    }

    #[test]
    fn test_missing_characteristic_targets_zero() {
        let actor = Actor::new(ActorId::new(1), "Vell");
        let context = CheckContext::characteristic(&actor, "wp", "Willpower");
        assert_eq!(context.base_target, 0);
        assert!(!context.skip_dialog);
    }
}
