use crossbeam_channel::Receiver;
use tracing::trace;

use crate::geometry::{pose2d::Pose2d, twist2d::Twist2d};

#[cfg(test)]
#[path = "odometry_tests.rs"]
mod odometry_tests;

/// Tracks the robot pose by integrating the displacement measured over each control cycle.
///
/// Each sample is a [Twist2d] in the local frame of the robot. Samples are applied with
/// [Pose2d::exp], so that a sample with a heading change follows an arc instead of a straight
/// line.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Odometry {
    /// The current pose estimate.
    pose: Pose2d,
}

impl Odometry {
    /// Creates a new [Odometry] instance that starts at the given pose.
    ///
    /// ## Parameters
    ///
    /// * 'initial' - The pose at which the robot starts.
    pub fn new(initial: Pose2d) -> Self {
        Self { pose: initial }
    }

    /// Returns the current pose estimate.
    pub fn pose(&self) -> &Pose2d {
        &self.pose
    }

    /// Resets the pose estimate, e.g. after the robot has been placed at a known location.
    pub fn reset(&mut self, pose: Pose2d) {
        self.pose = pose;
    }

    /// Applies a single odometry sample and returns the new pose estimate.
    ///
    /// ## Parameters
    ///
    /// * 'twist' - The displacement measured over the last control cycle, in the local frame
    ///   of the robot.
    pub fn update(&mut self, twist: &Twist2d) -> Pose2d {
        self.pose = self.pose.exp(twist);

        trace!(
            x = self.pose.x(),
            y = self.pose.y(),
            heading = self.pose.rotation().radians(),
            "Updated pose estimate"
        );

        self.pose
    }

    /// Applies all samples that are waiting in the channel, in the order in which they were
    /// sent. Returns the number of samples that were applied.
    ///
    /// Does not block. A disconnected channel is treated the same as an empty one.
    ///
    /// ## Parameters
    ///
    /// * 'receiver' - The channel on which the odometry samples arrive.
    pub fn update_from(&mut self, receiver: &Receiver<Twist2d>) -> usize {
        let mut count = 0;
        for twist in receiver.try_iter() {
            self.update(&twist);
            count += 1;
        }

        count
    }
}
