use std::f64::consts::PI;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use robot_control_core::{
    geometry::{
        pose2d::Pose2d, rotation2d::Rotation2d, transform2d::Transform2d, twist2d::Twist2d,
    },
    odometry::Odometry,
};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        pose2d_exp,
        pose2d_log,
        pose2d_plus,
        pose2d_relative_to,
        odometry_update_from,
}

criterion_main!(benches);

pub fn odometry_update_from(c: &mut Criterion) {
    let (sender, receiver) = crossbeam_channel::unbounded();
    let mut odometry = Odometry::default();
    let twist = Twist2d::new(0.02, 0.0, 0.01);

    c.bench_function("Odometry::update_from", |b| {
        b.iter(|| {
            for _ in 0..10 {
                let _ = sender.send(twist);
            }
            odometry.update_from(black_box(&receiver))
        });
    });
}

pub fn pose2d_exp(c: &mut Criterion) {
    let pose = Pose2d::new(1.0, 2.0, Rotation2d::from_radians(0.3));
    let twist = Twist2d::new(0.5, 0.1, 0.25 * PI);

    c.bench_function("Pose2d::exp", |b| {
        b.iter(|| black_box(&pose).exp(black_box(&twist)));
    });
}

pub fn pose2d_log(c: &mut Criterion) {
    let start = Pose2d::new(1.0, 2.0, Rotation2d::from_radians(0.3));
    let end = Pose2d::new(-0.5, 3.0, Rotation2d::from_radians(1.7));

    c.bench_function("Pose2d::log", |b| {
        b.iter(|| black_box(&start).log(black_box(&end)));
    });
}

pub fn pose2d_plus(c: &mut Criterion) {
    let pose = Pose2d::new(1.0, 2.0, Rotation2d::from_radians(0.3));
    let transform = Transform2d::from_coordinates(0.5, -0.25, Rotation2d::from_degrees(45.0));

    c.bench_function("Pose2d::plus", |b| {
        b.iter(|| black_box(&pose).plus(black_box(&transform)));
    });
}

pub fn pose2d_relative_to(c: &mut Criterion) {
    let pose = Pose2d::new(1.0, 2.0, Rotation2d::from_radians(0.3));
    let other = Pose2d::new(-3.0, 0.5, Rotation2d::from_radians(-1.2));

    c.bench_function("Pose2d::relative_to", |b| {
        b.iter(|| black_box(&pose).relative_to(black_box(&other)));
    });
}
