//! Check resolution.
//!
//! A check moves through these states:
//!
//! 1. **Collecting**: [`CheckEngine::prepare`] gathers modifiers and roll
//!    options into a [`PendingCheck`]
//! 2. **Awaiting confirmation** (optional): a [`CheckDialog`] may toggle or
//!    add modifiers, or cancel
//! 3. **Rolled / adjusted / finalized**: [`CheckEngine::finish`] rolls the
//!    d100, computes degrees, applies adjustments and returns a
//!    [`CheckResult`]
//!
//! A `PendingCheck` owns clones of everything it needs, so a host can hold
//! one across a UI round-trip and finish it later.

use crate::actor::ActorId;
use crate::core::{DieRoller, Domain, EngineConfig};
use crate::modifiers::{resolve_modifiers, Modifier, ModifierResolution};
use crate::predicate::RollOptions;
use crate::synthetics::DegreeAdjustment;

use super::context::CheckContext;
use super::dos::calculate_dos;
use super::result::CheckResult;

/// Roll option set when the check succeeded, before adjustments.
pub const SUCCESS_OPTION: &str = "check:success";
/// Roll option set when the check failed, before adjustments.
pub const FAILURE_OPTION: &str = "check:failure";

/// What the confirmation step decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DialogOutcome {
    Confirmed,
    Cancelled,
}

/// External confirmation step before the roll.
pub trait CheckDialog {
    fn confirm(&mut self, pending: &mut PendingCheck) -> DialogOutcome;
}

impl<F> CheckDialog for F
where
    F: FnMut(&mut PendingCheck) -> DialogOutcome,
{
    fn confirm(&mut self, pending: &mut PendingCheck) -> DialogOutcome {
        self(pending)
    }
}

/// Dialog that confirms without changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoConfirm;

impl CheckDialog for AutoConfirm {
    fn confirm(&mut self, _pending: &mut PendingCheck) -> DialogOutcome {
        DialogOutcome::Confirmed
    }
}

/// Receives finalized results (the chat log, in a VTT host).
pub trait CheckReporter {
    fn report(&mut self, result: &CheckResult);
}

impl<F> CheckReporter for F
where
    F: FnMut(&CheckResult),
{
    fn report(&mut self, result: &CheckResult) {
        self(result)
    }
}

/// Reporter that keeps every result in memory.
#[derive(Clone, Debug, Default)]
pub struct ChatLog {
    pub entries: Vec<CheckResult>,
}

impl CheckReporter for ChatLog {
    fn report(&mut self, result: &CheckResult) {
        self.entries.push(result.clone());
    }
}

/// A check whose inputs are collected but which has not been rolled.
#[derive(Clone, Debug)]
pub struct PendingCheck {
    actor: ActorId,
    label: String,
    domain: Domain,
    base_target: i64,
    modifiers: Vec<Modifier>,
    roll_options: RollOptions,
    adjustments: Vec<DegreeAdjustment>,
    cap: i64,
}

impl PendingCheck {
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    #[must_use]
    pub fn base_target(&self) -> i64 {
        self.base_target
    }

    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    #[must_use]
    pub fn roll_options(&self) -> &RollOptions {
        &self.roll_options
    }

    /// Flip a toggleable modifier. Returns its new state, or `None` if the
    /// index is out of range or the modifier is not toggleable.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let modifier = self.modifiers.get_mut(index).filter(|m| m.toggleable)?;
        modifier.enabled = !modifier.enabled;
        Some(modifier.enabled)
    }

    /// Add a modifier chosen in the dialog (a called shot, a GM bonus).
    pub fn add_modifier(&mut self, modifier: Modifier) {
        self.modifiers.push(modifier);
    }

    pub fn add_roll_option(&mut self, option: impl Into<String>) {
        self.roll_options.insert(option);
    }

    /// Resolve the current modifiers without rolling, for display.
    #[must_use]
    pub fn preview(&self) -> ModifierResolution {
        resolve_modifiers(self.modifiers.clone(), &self.roll_options, self.cap)
    }

    /// Target number the check would roll against right now.
    #[must_use]
    pub fn preview_target(&self) -> i64 {
        self.base_target.saturating_add(self.preview().total).max(1)
    }
}

/// Runs checks.
///
/// ```
/// use d100_engine::actor::{Actor, ActorId};
/// use d100_engine::check::{AutoConfirm, ChatLog, CheckContext, CheckEngine};
/// use d100_engine::core::FixedRolls;
///
/// let actor = Actor::new(ActorId::new(1), "Vell").with_characteristic("ws", 42);
/// let engine = CheckEngine::default();
/// let mut log = ChatLog::default();
///
/// let context = CheckContext::characteristic(&actor, "ws", "Weapon Skill");
/// let result = engine
///     .roll(&context, &mut AutoConfirm, &mut FixedRolls::new([17]), &mut log)
///     .unwrap();
///
/// assert!(result.success);
/// assert_eq!(result.degrees, 3);
/// assert_eq!(log.entries.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CheckEngine {
    config: EngineConfig,
}

impl CheckEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Collect modifiers, roll options and adjustments for a check.
    #[must_use]
    pub fn prepare(&self, context: &CheckContext<'_>) -> PendingCheck {
        let synthetics = context.actor.synthetics();

        let mut modifiers = synthetics.modifiers_for(&context.domain);
        modifiers.extend(context.modifiers.iter().cloned());

        let mut roll_options = synthetics.roll_options.clone();
        roll_options.merge(&context.derived_options());
        roll_options.merge(&context.roll_options);

        PendingCheck {
            actor: context.actor.id,
            label: context.label.clone(),
            domain: context.domain.clone(),
            base_target: context.base_target,
            modifiers,
            roll_options,
            adjustments: synthetics.dos_adjustments.clone(),
            cap: self.config.modifier_cap,
        }
    }

    /// Roll a pending check and compute its result.
    pub fn finish(&self, pending: PendingCheck, roller: &mut dyn DieRoller) -> CheckResult {
        let PendingCheck {
            actor,
            label,
            domain,
            base_target,
            modifiers,
            mut roll_options,
            adjustments,
            cap,
        } = pending;

        let resolution = resolve_modifiers(modifiers, &roll_options, cap);
        let target = base_target.saturating_add(resolution.total).max(1);

        let roll = i64::from(roller.d100());
        let outcome = calculate_dos(roll, target);

        roll_options.insert(if outcome.success { SUCCESS_OPTION } else { FAILURE_OPTION });
        let fired: Vec<&DegreeAdjustment> = adjustments.iter().filter(|adj| adj.applies(&roll_options)).collect();
        let adjusted = outcome.adjusted(fired.iter().map(|adj| adj.amount).fold(0, i64::saturating_add));

        tracing::debug!(
            %actor,
            %domain,
            roll,
            target,
            success = adjusted.success,
            degrees = adjusted.degrees,
            "check finalized"
        );

        CheckResult {
            actor,
            label,
            domain,
            roll,
            base_target,
            target,
            success: adjusted.success,
            degrees: adjusted.degrees,
            unadjusted_degrees: outcome.degrees,
            modifier_total: resolution.total,
            applied_modifiers: resolution.applied,
            all_modifiers: resolution.all,
            adjustments: fired.iter().map(|adj| adj.source.clone()).collect(),
        }
    }

    /// Run a check end to end.
    ///
    /// Returns `None` when the dialog cancels; nothing is rolled or
    /// reported in that case.
    pub fn roll(
        &self,
        context: &CheckContext<'_>,
        dialog: &mut dyn CheckDialog,
        roller: &mut dyn DieRoller,
        reporter: &mut dyn CheckReporter,
    ) -> Option<CheckResult> {
        let mut pending = self.prepare(context);

        if !context.skip_dialog && dialog.confirm(&mut pending) == DialogOutcome::Cancelled {
            tracing::debug!(label = %context.label, "check cancelled at confirmation");
            return None;
        }

        let result = self.finish(pending, roller);
        reporter.report(&result);
        Some(result)
    }
}
