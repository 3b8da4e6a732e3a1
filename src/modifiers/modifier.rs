//! The modifier value object.

use serde::{Deserialize, Serialize};

use crate::predicate::{Predicate, RollOptions};

/// Penalty applied when the shooter declares a called shot.
pub const CALLED_SHOT_PENALTY: i64 = -20;

/// A signed contribution to a check.
///
/// Modifiers are plain values. Checks work on their own clones, so toggling
/// one in a dialog never touches the Synthetics it was copied from.
///
/// ```
/// use d100_engine::modifiers::Modifier;
///
/// let half_aim = Modifier::new("Half Aim", 10)
///     .with_source("Aim Action")
///     .with_exclusion_group("aim");
///
/// assert_eq!(half_aim.value, 10);
/// assert_eq!(half_aim.exclusion_group.as_deref(), Some("aim"));
/// assert!(half_aim.enabled);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    /// Display label.
    pub label: String,

    /// Signed contribution.
    pub value: i64,

    /// Where the modifier came from (item name, condition, situation).
    #[serde(default)]
    pub source: String,

    /// Same-group, same-sign modifiers compete instead of stacking.
    #[serde(default)]
    pub exclusion_group: Option<String>,

    /// Gate on roll options. Empty passes.
    #[serde(default)]
    pub predicate: Predicate,

    /// Disabled modifiers are listed but never counted.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Whether a confirmation dialog may switch this modifier on or off.
    #[serde(default)]
    pub toggleable: bool,
}

fn default_enabled() -> bool {
    true
}

impl Modifier {
    /// Create an enabled, ungrouped, unconditional modifier.
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
            source: String::new(),
            exclusion_group: None,
            predicate: Predicate::always(),
            enabled: true,
            toggleable: false,
        }
    }

    /// The fixed penalty for a called shot.
    #[must_use]
    pub fn called_shot() -> Self {
        Self::new("Called Shot", CALLED_SHOT_PENALTY).with_source("Called Shot")
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_exclusion_group(mut self, group: impl Into<String>) -> Self {
        self.exclusion_group = Some(group.into());
        self
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: Predicate) -> Self {
        self.predicate = predicate;
        self
    }

    #[must_use]
    pub fn toggleable(mut self) -> Self {
        self.toggleable = true;
        self
    }

    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Enabled and predicate passes.
    #[must_use]
    pub fn is_active(&self, options: &RollOptions) -> bool {
        self.enabled && self.predicate.test(options)
    }

    #[must_use]
    pub fn is_bonus(&self) -> bool {
        self.value > 0
    }

    #[must_use]
    pub fn is_penalty(&self) -> bool {
        self.value < 0
    }
}
