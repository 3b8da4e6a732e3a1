//! Check results.

use serde::{Deserialize, Serialize};

use crate::actor::ActorId;
use crate::core::Domain;
use crate::modifiers::Modifier;

use super::dos::DegreeOutcome;

/// The finalized, immutable outcome of one check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub actor: ActorId,
    pub label: String,
    pub domain: Domain,
    /// Natural d100 result.
    pub roll: i64,
    pub base_target: i64,
    /// Target after modifiers, at least 1.
    pub target: i64,
    pub success: bool,
    /// Degrees of success or failure after adjustments.
    pub degrees: i64,
    /// Degrees before adjustments.
    pub unadjusted_degrees: i64,
    /// Capped sum of applied modifiers.
    pub modifier_total: i64,
    pub applied_modifiers: Vec<Modifier>,
    /// Every modifier considered, including disabled and excluded ones.
    pub all_modifiers: Vec<Modifier>,
    /// Sources of the degree adjustments that fired.
    pub adjustments: Vec<String>,
}

impl CheckResult {
    #[must_use]
    pub fn outcome(&self) -> DegreeOutcome {
        DegreeOutcome {
            success: self.success,
            degrees: self.degrees,
        }
    }

    /// Short human-readable summary, e.g. `Ballistic Skill: 40 vs 50, 2 DoS`.
    #[must_use]
    pub fn summary(&self) -> String {
        let kind = if self.success { "DoS" } else { "DoF" };
        format!("{}: {} vs {}, {} {}", self.label, self.roll, self.target, self.degrees, kind)
    }
}
