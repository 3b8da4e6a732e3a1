//! Degree-of-success arithmetic.
//!
//! A d100 test succeeds when the roll is at or under the target. The
//! outcome's magnitude is counted in degrees: one for the bare result, plus
//! one for every full ten points of margin. A natural 1 always succeeds
//! and a natural 100 always fails.
//!
//! | roll | target | result |
//! |------|--------|--------|
//! | 35 | 45 | success, 2 degrees |
//! | 45 | 45 | success, 1 degree |
//! | 46 | 45 | failure, 1 degree |
//! | 67 | 45 | failure, 3 degrees |

use serde::{Deserialize, Serialize};

/// Natural roll that always succeeds.
pub const NATURAL_SUCCESS: i64 = 1;
/// Natural roll that always fails.
pub const NATURAL_FAILURE: i64 = 100;

/// Whether a test passed, and by how much.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DegreeOutcome {
    pub success: bool,
    /// Degrees of success when `success`, otherwise degrees of failure.
    /// Never negative.
    pub degrees: i64,
}

impl DegreeOutcome {
    /// Positive for success, negative for failure. Opposed tests compare
    /// these.
    #[must_use]
    pub fn signed_degrees(&self) -> i64 {
        if self.success {
            self.degrees
        } else {
            -self.degrees
        }
    }

    /// Shift the degrees by `amount`, flooring at zero. The result never
    /// flips between success and failure.
    #[must_use]
    pub fn adjusted(self, amount: i64) -> Self {
        Self {
            success: self.success,
            degrees: self.degrees.saturating_add(amount).max(0),
        }
    }
}

/// Compute degrees of success or failure for `roll` against `target`.
///
/// ```
/// use d100_engine::check::calculate_dos;
///
/// let outcome = calculate_dos(35, 45);
/// assert!(outcome.success);
/// assert_eq!(outcome.degrees, 2);
///
/// let outcome = calculate_dos(100, 150);
/// assert!(!outcome.success);
/// assert_eq!(outcome.degrees, 1);
/// ```
#[must_use]
pub fn calculate_dos(roll: i64, target: i64) -> DegreeOutcome {
    let success = match roll {
        NATURAL_SUCCESS => true,
        NATURAL_FAILURE => false,
        _ => roll <= target,
    };

    let margin = if success { target.saturating_sub(roll) } else { roll.saturating_sub(target) };

    DegreeOutcome {
        success,
        degrees: 1 + margin.max(0) / 10,
    }
}
