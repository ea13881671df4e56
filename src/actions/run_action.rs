use super::action::Action;

#[cfg(test)]
#[path = "run_action_tests.rs"]
mod run_action_tests;

/// Defines an action that runs a closure on its first execution and then finishes.
///
/// Useful for commands that take effect immediately, e.g. switching an actuator on.
pub struct RunAction {
    /// The human readable name for the action.
    name: String,

    /// The closure that is run.
    run: Box<dyn FnMut()>,

    /// A flag indicating whether the closure has run since the action was initialized.
    has_run: bool,
}

impl RunAction {
    /// Creates a new [RunAction] instance.
    ///
    /// ## Parameters
    ///
    /// * 'name' - The name of the action.
    /// * 'run' - The closure that is run when the action is executed.
    pub fn new(name: impl Into<String>, run: impl FnMut() + 'static) -> Self {
        Self {
            name: name.into(),
            run: Box::new(run),
            has_run: false,
        }
    }
}

impl Action for RunAction {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self) {
        self.has_run = false;
    }

    fn execute(&mut self) {
        if !self.has_run {
            (self.run)();
            self.has_run = true;
        }
    }

    fn is_finished(&self) -> bool {
        self.has_run
    }
}
