use crossbeam_channel::Receiver;
use tracing::{debug, trace};

use crate::{
    actions::action_scheduler::ActionScheduler,
    config::RobotConfig,
    geometry::{pose2d::Pose2d, twist2d::Twist2d},
    odometry::Odometry,
};

#[cfg(test)]
#[path = "control_loop_tests.rs"]
mod control_loop_tests;

/// Defines the periodic driver of the robot control stack.
///
/// The control loop owns the [ActionScheduler] and the [Odometry]. It does not own a clock; the
/// caller invokes [ControlLoop::cycle] at the control frequency. Each cycle first applies the
/// odometry samples that arrived since the previous cycle, so that actions see the latest pose,
/// and then advances every active action by one tick.
pub struct ControlLoop {
    /// The scheduler that advances the actions.
    scheduler: ActionScheduler,

    /// The running pose estimate.
    odometry: Odometry,

    /// The channel on which odometry samples arrive, if any.
    twist_receiver: Option<Receiver<Twist2d>>,

    /// The number of completed cycles.
    cycle_count: u64,
}

impl ControlLoop {
    /// Runs a single control cycle.
    pub fn cycle(&mut self) {
        let samples = match &self.twist_receiver {
            Some(receiver) => self.odometry.update_from(receiver),
            None => 0,
        };

        self.scheduler.run();
        self.cycle_count += 1;

        trace!(
            cycle = self.cycle_count,
            samples,
            active = self.scheduler.active_count(),
            "Completed control cycle"
        );
    }

    /// Returns the number of cycles that have been run.
    pub fn cycle_count(&self) -> u64 {
        self.cycle_count
    }

    /// Creates a new [ControlLoop] instance from the robot configuration.
    ///
    /// The odometry starts at the configured initial pose. No odometry samples are read until
    /// a channel is attached with [ControlLoop::with_twist_receiver].
    ///
    /// ## Parameters
    ///
    /// * 'config' - The robot configuration.
    pub fn new(config: &RobotConfig) -> Self {
        let initial = config.odometry.initial_pose();
        debug!(
            x = initial.x(),
            y = initial.y(),
            heading = initial.rotation().radians(),
            "Creating control loop"
        );

        Self {
            scheduler: ActionScheduler::new(),
            odometry: Odometry::new(initial),
            twist_receiver: None,
            cycle_count: 0,
        }
    }

    /// Returns the odometry.
    pub fn odometry(&self) -> &Odometry {
        &self.odometry
    }

    /// Returns the current pose estimate.
    pub fn pose(&self) -> &Pose2d {
        self.odometry.pose()
    }

    /// Returns the scheduler.
    pub fn scheduler(&self) -> &ActionScheduler {
        &self.scheduler
    }

    /// Returns the scheduler so that actions can be added and scheduled.
    pub fn scheduler_mut(&mut self) -> &mut ActionScheduler {
        &mut self.scheduler
    }

    /// Attaches the channel on which the odometry samples arrive.
    ///
    /// ## Parameters
    ///
    /// * 'receiver' - The receiving end of the odometry channel.
    pub fn with_twist_receiver(mut self, receiver: Receiver<Twist2d>) -> Self {
        self.twist_receiver = Some(receiver);
        self
    }
}
