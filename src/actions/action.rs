//! Defines the lifecycle of a unit of cooperative work.
//!
//! An [Action] moves through the following states, driven by the
//! [ActionScheduler](super::action_scheduler::ActionScheduler):
//!
//! ```text
//! Unscheduled --initialize()--> Active --execute(), is_finished()--> ... --end(false)--> Finished
//! ```
//!
//! No state is skipped: `initialize` is always called before the first `execute`, and neither
//! `execute` nor `is_finished` is called once `end` has been called.

use std::fmt::Display;

/// Defines where an action is in its lifecycle.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ActionState {
    /// The action is known to the scheduler but has not been initialized.
    Unscheduled,

    /// The action has been initialized and is executed on every tick.
    Active,

    /// The action reported that it is finished and `end` has been called.
    Finished,
}

impl Display for ActionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionState::Unscheduled => write!(f, "Unscheduled"),
            ActionState::Active => write!(f, "Active"),
            ActionState::Finished => write!(f, "Finished"),
        }
    }
}

/// Defines a unit of work that is advanced cooperatively, one step per scheduler tick.
///
/// Implementations must never block. Behaviour that takes a long time should be expressed as
/// state that is checked again on every tick.
///
/// Actions may refer to hardware systems that other actions refer to as well. The scheduler
/// does not arbitrate between actions, so actions that command the same system at the same
/// time have to coordinate themselves.
pub trait Action {
    /// Returns the human readable name of the action.
    fn name(&self) -> &str;

    /// Called exactly once when the action is scheduled, before the first call to
    /// [Action::execute].
    fn initialize(&mut self) {}

    /// Called once per scheduler tick while the action is active. Must be safe to call
    /// repeatedly.
    fn execute(&mut self) {}

    /// Returns a value indicating whether the action is done. Evaluated once per tick, after
    /// [Action::execute].
    fn is_finished(&self) -> bool;

    /// Called exactly once when the action is retired.
    ///
    /// ## Parameters
    ///
    /// * 'interrupted' - `true` if the action was cancelled, `false` if it finished on its own.
    ///   The scheduler only retires finished actions so it always passes `false`.
    fn end(&mut self, _interrupted: bool) {}
}
