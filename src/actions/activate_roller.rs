use std::rc::Rc;

use tracing::{info, warn};

use crate::{config::RollerConstants, hardware::system::ControlSystem};

use super::{action::Action, run_action::RunAction};

#[cfg(test)]
#[path = "activate_roller_tests.rs"]
mod activate_roller_tests;

/// Defines an action that drives the roller at the configured speed.
///
/// The speed is commanded once, after which the action finishes. The roller keeps running
/// until another action commands it.
pub struct ActivateRollerAction {
    /// The one-shot action that sends the speed command.
    action: RunAction,
}

impl ActivateRollerAction {
    /// Creates a new [ActivateRollerAction] instance.
    ///
    /// ## Parameters
    ///
    /// * 'roller' - The roller system. May be shared with other actions.
    /// * 'constants' - The roller constants that provide the speed.
    pub fn new(roller: Rc<dyn ControlSystem>, constants: &RollerConstants) -> Self {
        let speed = constants.speed;
        let action = RunAction::new("Activate Roller", move || {
            info!(system = roller.name(), speed, "Activating roller");
            if let Err(error) = roller.set(speed) {
                warn!(system = roller.name(), %error, "Failed to activate roller");
            }
        });

        Self { action }
    }
}

impl Action for ActivateRollerAction {
    fn name(&self) -> &str {
        self.action.name()
    }

    fn initialize(&mut self) {
        self.action.initialize();
    }

    fn execute(&mut self) {
        self.action.execute();
    }

    fn is_finished(&self) -> bool {
        self.action.is_finished()
    }

    fn end(&mut self, interrupted: bool) {
        self.action.end(interrupted);
    }
}
