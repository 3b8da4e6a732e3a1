//! Actors: characters that own items and roll checks.
//!
//! The host recomputes an actor's derived data whenever its items change.
//! Each recomputation runs two phases:
//!
//! 1. [`Actor::prepare_base_data`]: start from a fresh, empty Synthetics
//! 2. [`Actor::prepare_embedded_rules`]: run every rule of every item
//!
//! ```
//! use d100_engine::actor::{Actor, ActorId};
//! use d100_engine::items::{Item, ItemId};
//! use d100_engine::rule_elements::RuleElementRegistry;
//! use serde_json::json;
//!
//! let registry = RuleElementRegistry::new();
//! let mut actor = Actor::new(ActorId::new(1), "Sergeant Vell")
//!     .with_characteristic("t", 35)
//!     .with_item(
//!         Item::new(ItemId::new(1), "Iron Jaw")
//!             .with_rule(json!({"key": "AdjustToughness", "value": 5})),
//!     );
//!
//! actor.prepare_data(&registry);
//! assert_eq!(actor.toughness(), 40);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::items::Item;
use crate::rule_elements::{PreparationStats, RuleElementRegistry};
use crate::synthetics::Synthetics;

/// Characteristic key read for toughness.
pub const TOUGHNESS: &str = "t";

/// Identifier of an actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(pub u32);

impl ActorId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Actor({})", self.0)
    }
}

/// A character.
///
/// `synthetics` is derived data: it is never serialized and is rebuilt by
/// every call to [`Actor::prepare_data`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Actor {
    #[serde(default)]
    pub id: ActorId,

    pub name: String,

    /// Characteristic values keyed by short name (`ws`, `bs`, `t`, ...).
    #[serde(default)]
    pub characteristics: FxHashMap<String, i64>,

    #[serde(default)]
    pub items: Vec<Item>,

    #[serde(skip)]
    synthetics: Synthetics,
}

impl Actor {
    #[must_use]
    pub fn new(id: ActorId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_characteristic(mut self, key: impl Into<String>, value: i64) -> Self {
        self.characteristics.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// A characteristic value, or 0 if the actor lacks it.
    #[must_use]
    pub fn characteristic(&self, key: &str) -> i64 {
        self.characteristics.get(key).copied().unwrap_or(0)
    }

    /// The Synthetics from the last preparation pass.
    #[must_use]
    pub fn synthetics(&self) -> &Synthetics {
        &self.synthetics
    }

    /// Phase one: discard the previous pass.
    pub fn prepare_base_data(&mut self) {
        self.synthetics = Synthetics::new();
    }

    /// Phase two: run every owned item's rules.
    pub fn prepare_embedded_rules(&mut self, registry: &RuleElementRegistry) -> PreparationStats {
        let stats = registry.prepare(&self.items, &mut self.synthetics);
        if stats.failed > 0 {
            tracing::debug!(actor = %self.name, failed = stats.failed, "preparation finished with rule failures");
        }
        stats
    }

    /// Both phases, in order.
    pub fn prepare_data(&mut self, registry: &RuleElementRegistry) -> PreparationStats {
        self.prepare_base_data();
        self.prepare_embedded_rules(registry)
    }

    /// Toughness after adjustments.
    #[must_use]
    pub fn toughness(&self) -> i64 {
        self.synthetics.toughness(self.characteristic(TOUGHNESS))
    }

    /// Tens digit of effective toughness.
    #[must_use]
    pub fn toughness_bonus(&self) -> i64 {
        self.toughness().div_euclid(10)
    }
}
