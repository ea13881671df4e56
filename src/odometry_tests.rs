use super::*;
use float_cmp::{ApproxEq, F64Margin};
use std::f64::consts::PI;

use crate::geometry::rotation2d::Rotation2d;

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn when_created_should_start_at_initial_pose() {
    let initial = Pose2d::new(1.0, 2.0, Rotation2d::from_radians(0.3));
    let odometry = Odometry::new(initial);

    assert_eq!(&initial, odometry.pose());
}

#[test]
fn when_updating_with_straight_samples_should_accumulate_distance() {
    let mut odometry = Odometry::new(Pose2d::new(0.0, 0.0, Rotation2d::from_degrees(90.0)));

    for _ in 0..10 {
        odometry.update(&Twist2d::new(0.1, 0.0, 0.0));
    }

    assert!(odometry.pose().approx_eq(
        Pose2d::new(0.0, 1.0, Rotation2d::from_degrees(90.0)),
        margin()
    ));
}

#[test]
fn when_updating_with_arc_samples_should_follow_the_circle() {
    let mut odometry = Odometry::default();
    let steps = 100;
    let step = Twist2d::new(PI / steps as f64, 0.0, PI / steps as f64);

    for _ in 0..steps {
        odometry.update(&step);
    }

    // Half a circle of radius 1 ends at (0, 2) facing backwards.
    assert!(odometry
        .pose()
        .approx_eq(Pose2d::new(0.0, 2.0, Rotation2d::from_radians(PI)), margin()));
}

#[test]
fn when_updating_should_return_the_new_pose() {
    let mut odometry = Odometry::default();

    let pose = odometry.update(&Twist2d::new(0.5, -0.25, 0.0));

    assert_eq!(&pose, odometry.pose());
    assert!(pose.approx_eq(
        Pose2d::new(0.5, -0.25, Rotation2d::identity()),
        margin()
    ));
}

#[test]
fn when_resetting_should_replace_the_estimate() {
    let mut odometry = Odometry::default();
    odometry.update(&Twist2d::new(1.0, 0.0, 0.2));

    let pose = Pose2d::new(-4.0, 3.0, Rotation2d::from_radians(-1.0));
    odometry.reset(pose);

    assert_eq!(&pose, odometry.pose());
}

#[test]
fn when_updating_from_channel_should_apply_all_pending_samples_in_order() {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let mut odometry = Odometry::default();

    sender.send(Twist2d::new(0.0, 0.0, 0.5 * PI)).unwrap();
    sender.send(Twist2d::new(1.0, 0.0, 0.0)).unwrap();

    let count = odometry.update_from(&receiver);

    // Turning first and then driving forward ends on the y axis.
    assert_eq!(2, count);
    assert!(odometry.pose().approx_eq(
        Pose2d::new(0.0, 1.0, Rotation2d::from_radians(0.5 * PI)),
        margin()
    ));
    assert!(receiver.is_empty());
}

#[test]
fn when_updating_from_empty_channel_should_keep_the_estimate() {
    let (sender, receiver) = crossbeam_channel::unbounded::<Twist2d>();
    let mut odometry = Odometry::new(Pose2d::new(1.0, 1.0, Rotation2d::identity()));

    assert_eq!(0, odometry.update_from(&receiver));

    drop(sender);
    assert_eq!(0, odometry.update_from(&receiver));
    assert_eq!(&Pose2d::new(1.0, 1.0, Rotation2d::identity()), odometry.pose());
}
