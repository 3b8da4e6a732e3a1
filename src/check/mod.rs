//! d100 checks.
//!
//! - [`CheckContext`]: inputs for one test
//! - [`CheckEngine`]: collects modifiers, rolls, computes degrees
//! - [`PendingCheck`]: a collected check awaiting confirmation
//! - [`CheckResult`]: the finalized outcome
//! - [`calculate_dos`]: degree-of-success arithmetic
//!
//! The host plugs in three collaborators: a [`CheckDialog`] for the
//! optional confirmation step, a [`DieRoller`](crate::core::DieRoller)
//! for the dice, and a [`CheckReporter`] that renders results.

mod context;
mod dos;
mod engine;
mod result;

pub use context::CheckContext;
pub use dos::{calculate_dos, DegreeOutcome, NATURAL_FAILURE, NATURAL_SUCCESS};
pub use engine::{
    AutoConfirm, ChatLog, CheckDialog, CheckEngine, CheckReporter, DialogOutcome, PendingCheck,
    FAILURE_OPTION, SUCCESS_OPTION,
};
pub use result::CheckResult;
