use super::action::Action;

#[cfg(test)]
#[path = "wait_until_action_tests.rs"]
mod wait_until_action_tests;

/// Defines an action that does nothing until a condition holds.
///
/// The condition is evaluated once per tick. It should be free of side effects, or only have
/// side effects that are safe to repeat on every tick until it returns `true`.
pub struct WaitUntilAction {
    /// The condition that ends the wait.
    condition: Box<dyn Fn() -> bool>,
}

impl WaitUntilAction {
    /// Creates a new [WaitUntilAction] instance.
    ///
    /// ## Parameters
    ///
    /// * 'condition' - The condition that should hold before the action finishes.
    pub fn new(condition: impl Fn() -> bool + 'static) -> Self {
        Self {
            condition: Box::new(condition),
        }
    }
}

impl Action for WaitUntilAction {
    fn name(&self) -> &str {
        "WaitUntilAction"
    }

    fn is_finished(&self) -> bool {
        (self.condition)()
    }
}
