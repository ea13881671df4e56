use crate::Error;

/// Defines the interface for a hardware system that can be commanded by an action, e.g. an
/// actuator such as the roller.
///
/// Systems are shared between actions, so commands are issued through a shared reference.
/// There is no locking discipline: if two active actions command the same system in the same
/// tick, the last command wins.
pub trait ControlSystem {
    /// Returns the human readable name of the system.
    fn name(&self) -> &str;

    /// Sends a new set point to the system.
    ///
    /// ## Parameters
    ///
    /// * 'value' - The set point, in the units of the system
    ///
    /// ## Errors
    ///
    /// * [Error::FailedToSetSystemValue] - Returned when the command could not be delivered
    fn set(&self, value: f64) -> Result<(), Error>;
}
