use crossbeam_channel::{Receiver, Sender};

use crate::Error;

use super::system::ControlSystem;

#[cfg(test)]
#[path = "roller_tests.rs"]
mod roller_tests;

/// Defines the roller system. Speed commands are forwarded over a channel to the hardware
/// driver, which owns the receiving end.
#[derive(Clone, Debug)]
pub struct RollerSystem {
    /// The human readable name for the roller.
    name: String,

    /// The channel sender that is used to send speed commands to the roller driver.
    command_sender: Sender<f64>,
}

impl RollerSystem {
    /// Creates a new [RollerSystem] that sends its commands to an existing channel.
    ///
    /// ## Parameters
    ///
    /// * 'name' - The name of the roller.
    /// * 'command_sender' - The sender for the channel that the roller driver listens on.
    pub fn from_sender(name: impl Into<String>, command_sender: Sender<f64>) -> Self {
        Self {
            name: name.into(),
            command_sender,
        }
    }

    /// Creates a new [RollerSystem] together with the [Receiver] on which the roller driver
    /// receives the speed commands.
    ///
    /// ## Parameters
    ///
    /// * 'name' - The name of the roller.
    pub fn new(name: impl Into<String>) -> (Self, Receiver<f64>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self::from_sender(name, sender), receiver)
    }
}

impl ControlSystem for RollerSystem {
    fn name(&self) -> &str {
        &self.name
    }

    fn set(&self, value: f64) -> Result<(), Error> {
        // Until https://github.com/rust-lang/rust/issues/99301 is fixed we can't send an error type
        // with generics (i.e. SendError<f64>) into a thiserror source / backtrace error translator
        self.command_sender
            .send(value)
            .map_err(|_source| Error::FailedToSetSystemValue {
                name: self.name.clone(),
            })
    }
}
