//! Rule element registry.
//!
//! The registry turns raw content sources into [`RuleElement`]s by looking
//! up their `key`. Unknown keys yield `None` so content written for newer
//! engine versions degrades gracefully.
//!
//! The registry is an ordinary value. Hosts build one at startup, may add
//! aliases for legacy keys, and pass it by reference to every preparation
//! pass.

use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::RuleElementError;
use crate::items::Item;
use crate::synthetics::Synthetics;

use super::elements::{
    AdjustDegreeRule, AdjustToughnessRule, ChoiceSetRule, DiceOverrideRule, FlatModifierRule,
    GrantItemRule, ResistanceRule, RollOptionRule, RuleElement, RuleKind,
};

/// Builds a rule kind from its content source.
pub type RuleFactory = fn(&Value) -> Result<RuleKind, serde_json::Error>;

/// Deserialize a variant struct and wrap it.
fn factory<T>(source: &Value) -> Result<RuleKind, serde_json::Error>
where
    T: DeserializeOwned + Into<RuleKind>,
{
    T::deserialize(source).map(Into::into)
}

/// Counters from one preparation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreparationStats {
    /// Elements that wrote into Synthetics.
    pub applied: usize,
    /// Sources with unknown or missing keys, or malformed fields.
    pub skipped: usize,
    /// Elements whose `on_prepare_data` returned an error.
    pub failed: usize,
}

/// Keyed factory for rule elements.
///
/// ```
/// use d100_engine::items::{Item, ItemId};
/// use d100_engine::rule_elements::RuleElementRegistry;
/// use serde_json::json;
///
/// let registry = RuleElementRegistry::new();
/// let owner = Item::new(ItemId::new(1), "Hatred (Mutants)");
///
/// let known = json!({"key": "FlatModifier", "domain": "characteristic:ws", "value": 10});
/// assert!(registry.instantiate(&known, &owner).is_some());
///
/// let unknown = json!({"key": "SummonDaemon"});
/// assert!(registry.instantiate(&unknown, &owner).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct RuleElementRegistry {
    factories: FxHashMap<String, RuleFactory>,
}

impl Default for RuleElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleElementRegistry {
    /// A registry with every built-in rule element.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register("FlatModifier", factory::<FlatModifierRule>);
        registry.register("RollOption", factory::<RollOptionRule>);
        registry.register("DiceOverride", factory::<DiceOverrideRule>);
        registry.register("AdjustDegree", factory::<AdjustDegreeRule>);
        registry.register("Resistance", factory::<ResistanceRule>);
        registry.register("AdjustToughness", factory::<AdjustToughnessRule>);
        registry.register("GrantItem", factory::<GrantItemRule>);
        registry.register("ChoiceSet", factory::<ChoiceSetRule>);
        registry
    }

    /// A registry that knows no keys.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a factory under `key`, replacing any previous one.
    pub fn register(&mut self, key: impl Into<String>, factory: RuleFactory) {
        self.factories.insert(key.into(), factory);
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.factories.contains_key(key)
    }

    /// Registered keys in lexical order.
    #[must_use]
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<_> = self.factories.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Build a rule element, reporting why a source was rejected.
    ///
    /// `Ok(None)` means the key is not registered.
    pub fn try_instantiate(&self, source: &Value, owner: &Item) -> Result<Option<RuleElement>, RuleElementError> {
        let key = source
            .get("key")
            .and_then(Value::as_str)
            .ok_or(RuleElementError::MissingKey)?;

        let Some(factory) = self.factories.get(key) else {
            return Ok(None);
        };

        let kind = factory(source).map_err(|source| RuleElementError::Malformed {
            key: key.to_string(),
            source,
        })?;

        let label = source.get("label").and_then(Value::as_str).map(str::to_string);
        Ok(Some(RuleElement::new(owner, label, kind)))
    }

    /// Build a rule element, or `None` if the source cannot be used.
    ///
    /// Unknown keys are expected and logged at debug level; malformed
    /// sources for known keys are logged as warnings.
    #[must_use]
    pub fn instantiate(&self, source: &Value, owner: &Item) -> Option<RuleElement> {
        match self.try_instantiate(source, owner) {
            Ok(Some(element)) => Some(element),
            Ok(None) => {
                let key = source.get("key").and_then(Value::as_str).unwrap_or_default();
                tracing::debug!(item = %owner.name, key, "skipping unknown rule element");
                None
            }
            Err(RuleElementError::MissingKey) => {
                tracing::debug!(item = %owner.name, "skipping rule element without a key");
                None
            }
            Err(err) => {
                tracing::warn!(item = %owner.name, error = %err, "skipping malformed rule element");
                None
            }
        }
    }

    /// Run every rule of every item into `synthetics`.
    ///
    /// A failing element is logged and skipped; the rest still run.
    pub fn prepare<'a>(
        &self,
        items: impl IntoIterator<Item = &'a Item>,
        synthetics: &mut Synthetics,
    ) -> PreparationStats {
        let mut stats = PreparationStats::default();

        for item in items {
            for source in &item.rules {
                let Some(element) = self.instantiate(source, item) else {
                    stats.skipped += 1;
                    continue;
                };

                match element.on_prepare_data(item, synthetics) {
                    Ok(()) => stats.applied += 1,
                    Err(err) => {
                        tracing::warn!(
                            item = %item.name,
                            key = element.key(),
                            error = %err,
                            "rule element failed during data preparation"
                        );
                        stats.failed += 1;
                    }
                }
            }
        }

        stats
    }
}
