/// Defines the lifecycle of a schedulable unit of work
pub mod action;

/// Provides the scheduler that advances all active actions once per tick
pub mod action_scheduler;

/// Provides an action that runs a closure once
pub mod run_action;

/// Provides an action that finishes once a condition holds
pub mod wait_until_action;

/// Provides an action that turns on the roller
pub mod activate_roller;
