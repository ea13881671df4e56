use super::*;
use std::f64::consts::PI;

fn margin() -> F64Margin {
    F64Margin {
        ulps: 2,
        epsilon: 1e-9,
    }
}

#[test]
fn when_creating_translation_should_store_components() {
    let translation = Translation2d::new(1.5, -2.5);

    assert_eq!(1.5, translation.x());
    assert_eq!(-2.5, translation.y());
}

#[test]
fn when_adding_and_subtracting_should_work_per_component() {
    let a = Translation2d::new(1.0, 2.0);
    let b = Translation2d::new(-4.0, 0.5);

    assert_eq!(Translation2d::new(-3.0, 2.5), a + b);
    assert_eq!(Translation2d::new(5.0, 1.5), a - b);
    assert_eq!(a.plus(&b), a + b);
    assert_eq!(a.minus(&b), a - b);
}

#[test]
fn when_scaling_should_scale_both_components() {
    let translation = Translation2d::new(2.0, -3.0);

    assert_eq!(Translation2d::new(5.0, -7.5), translation * 2.5);
    assert_eq!(Translation2d::new(1.0, -1.5), translation / 2.0);
    assert_eq!(Translation2d::new(-2.0, 3.0), -translation);
    assert_eq!(translation.unary_minus(), -translation);
}

#[test]
fn when_rotating_should_apply_the_rotation_matrix() {
    let translation = Translation2d::new(2.0, 1.0);

    let quarter_turn = translation.rotate_by(&Rotation2d::from_radians(0.5 * PI));
    assert!(quarter_turn.approx_eq(Translation2d::new(-1.0, 2.0), margin()));

    let angle = 0.3_f64;
    let rotated = translation.rotate_by(&Rotation2d::from_radians(angle));
    let expected = Translation2d::new(
        2.0 * angle.cos() - 1.0 * angle.sin(),
        2.0 * angle.sin() + 1.0 * angle.cos(),
    );
    assert!(rotated.approx_eq(expected, margin()));
}

#[test]
fn when_rotating_should_preserve_length() {
    let translation = Translation2d::new(3.0, 4.0);

    let rotated = translation.rotate_by(&Rotation2d::from_degrees(-123.0));

    assert!(rotated.norm().approx_eq(5.0, margin()));
}

#[test]
fn when_measuring_distance_should_return_euclidean_distance() {
    let a = Translation2d::new(1.0, 1.0);
    let b = Translation2d::new(4.0, 5.0);

    assert!(a.distance(&b).approx_eq(5.0, margin()));
    assert!(b.distance(&a).approx_eq(5.0, margin()));
}
