#![warn(missing_docs)]

//! Kinematic and scheduling core for a robot control stack.
//!
//! Provides a rigid-body pose algebra over the special Euclidean group SE(2), used to track
//! the robot pose by integrating incremental motion, and a cooperative action scheduler that
//! advances many independent control actions once per control cycle without blocking.

use thiserror::Error;

use crate::actions::action_scheduler::ActionHandle;

/// Defines the SE(2) rotation, translation, transform, pose and twist types.
pub mod geometry;

/// Defines the schedulable actions and the scheduler that drives them.
pub mod actions;

/// Defines the interfaces for the hardware systems that actions command.
pub mod hardware;

/// Provides the running pose estimate that is built from odometry samples.
pub mod odometry;

/// Provides the driver that advances the odometry and the scheduler once per control cycle.
pub mod control_loop;

/// Defines the robot constants and how they are loaded.
pub mod config;

/// Provides the setup for structured logging.
pub mod telemetry;

/// Defines the different errors for the robot control crate.
#[derive(Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Returned when an [ActionHandle] does not refer to an action that is stored in the scheduler,
    /// either because the action was removed or because the handle came from another scheduler.
    #[error("The action handle {handle} does not refer to a stored action.")]
    InvalidActionHandle {
        /// The handle that was used.
        handle: ActionHandle,
    },

    /// Returned when trying to remove an action that is still being executed by the scheduler.
    #[error("The action {handle} is still active and cannot be removed.")]
    ActionStillActive {
        /// The handle of the active action.
        handle: ActionHandle,
    },

    /// Returned when a command could not be delivered to a hardware system.
    #[error("Failed to set the value of the system {name}.")]
    FailedToSetSystemValue {
        /// The name of the system.
        name: String,
    },

    /// Returned when the configuration could not be read or parsed.
    #[error("Failed to read the configuration from {source_name}: {reason}")]
    FailedToReadConfiguration {
        /// The path or description of the configuration source.
        source_name: String,
        /// The reason the configuration could not be read.
        reason: String,
    },

    /// Returned when the configuration contains values that cannot be used.
    #[error("The configuration is invalid: {reason}")]
    InvalidConfiguration {
        /// The reason the configuration is invalid.
        reason: String,
    },

    /// Returned when the logging subscriber could not be installed.
    #[error("Failed to initialize logging: {reason}")]
    FailedToInitializeLogging {
        /// The reason the subscriber could not be installed.
        reason: String,
    },
}
