//! Engine configuration.
//!
//! Deployments tune the engine through `EngineConfig`. Today that is a
//! single knob, the symmetric cap applied to a check's modifier total.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Default symmetric cap on the summed modifiers of one check.
pub const DEFAULT_MODIFIER_CAP: i64 = 60;

/// Complete engine configuration.
///
/// ```
/// use d100_engine::core::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "modifierCap": 30 }"#).unwrap();
/// assert_eq!(config.modifier_cap, 30);
///
/// let config = EngineConfig::default();
/// assert_eq!(config.modifier_cap, 60);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Modifier totals are clamped into `[-modifier_cap, modifier_cap]`.
    pub modifier_cap: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            modifier_cap: DEFAULT_MODIFIER_CAP,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the modifier cap.
    #[must_use]
    pub fn with_modifier_cap(mut self, cap: i64) -> Self {
        self.modifier_cap = cap;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.modifier_cap < 0 {
            return Err(EngineError::InvalidModifierCap(self.modifier_cap));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
