//! Defines the absolute pose of a robot in the plane and the integration of incremental
//! motion into that pose.
//!
//! A [Pose2d] is an immutable value. Every operation returns a new pose, which makes it
//! possible to keep the previous estimate around while a new one is computed each control
//! cycle.
//!
//! ## References
//!
//! * [Lie groups for 2D and 3D transformations](https://ethaneade.com/lie.pdf)
//!   Ethan Eade, section 3: the closed form exponential and logarithm maps of SE(2)

use std::ops::{Add, Sub};

use float_cmp::{ApproxEq, F64Margin};

use super::{
    rotation2d::Rotation2d, transform2d::Transform2d, translation2d::Translation2d,
    twist2d::Twist2d,
};

#[cfg(test)]
#[path = "pose2d_tests.rs"]
mod pose2d_tests;

/// Angles, in radians, below which the closed form series terms are replaced by their
/// Taylor expansions to avoid dividing by a value that is close to zero.
const SMALL_ANGLE_THRESHOLD: f64 = 1e-9;

/// Defines the position and heading of a robot in the world frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pose2d {
    /// The position in the world frame.
    translation: Translation2d,

    /// The heading in the world frame.
    rotation: Rotation2d,
}

impl Pose2d {
    /// Returns the pose that results from moving along the constant local frame velocity
    /// `twist` for one unit of time, starting at the current pose.
    ///
    /// This uses the exact SE(2) exponential map rather than an Euler step, so that a twist
    /// with both a translational and a rotational part follows the arc of a circle.
    ///
    /// ## Parameters
    ///
    /// * 'twist' - The change in pose, expressed in the frame of the current pose
    ///
    /// ## Example
    ///
    /// ```
    /// use std::f64::consts::PI;
    /// use robot_control_core::geometry::{pose2d::Pose2d, twist2d::Twist2d};
    ///
    /// // Drive a quarter circle of length 1.0
    /// let pose = Pose2d::default().exp(&Twist2d::new(1.0, 0.0, 0.5 * PI));
    /// assert!((pose.x() - 2.0 / PI).abs() < 1e-9);
    /// assert!((pose.y() - 2.0 / PI).abs() < 1e-9);
    /// ```
    pub fn exp(&self, twist: &Twist2d) -> Self {
        let dx = twist.dx();
        let dy = twist.dy();
        let dtheta = twist.dtheta();

        let sin_theta = dtheta.sin();
        let cos_theta = dtheta.cos();

        let (s, c) = if dtheta.abs() < SMALL_ANGLE_THRESHOLD {
            (1.0 - dtheta * dtheta / 6.0, 0.5 * dtheta)
        } else {
            (sin_theta / dtheta, (1.0 - cos_theta) / dtheta)
        };

        let transform = Transform2d::new(
            Translation2d::new(dx * s - dy * c, dx * c + dy * s),
            Rotation2d::from_cos_sin(cos_theta, sin_theta),
        );

        self.plus(&transform)
    }

    /// Creates a new [Pose2d] instance from a translation and a rotation.
    pub fn from_parts(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the twist that moves the current pose onto `end`, i.e. the inverse of
    /// [Pose2d::exp]: `self.exp(&self.log(end))` equals `end`.
    pub fn log(&self, end: &Pose2d) -> Twist2d {
        let transform = end.relative_to(self);
        let dtheta = transform.rotation().radians();
        let half_dtheta = 0.5 * dtheta;

        let cos_minus_one = transform.rotation().cos() - 1.0;
        let half_theta_by_tan_of_half_dtheta = if cos_minus_one.abs() < SMALL_ANGLE_THRESHOLD {
            1.0 - dtheta * dtheta / 12.0
        } else {
            -(half_dtheta * transform.rotation().sin()) / cos_minus_one
        };

        let translation = transform
            .translation()
            .rotate_by(&Rotation2d::from_cos_sin(
                half_theta_by_tan_of_half_dtheta,
                -half_dtheta,
            ))
            .times(half_theta_by_tan_of_half_dtheta.hypot(half_dtheta));

        Twist2d::new(translation.x(), translation.y(), dtheta)
    }

    /// Returns the transform that maps `other` onto the current pose, i.e.
    /// `other + (self - other) == self`.
    pub fn minus(&self, other: &Pose2d) -> Transform2d {
        let pose = self.relative_to(other);
        Transform2d::new(pose.translation, pose.rotation)
    }

    /// Creates a new [Pose2d] instance.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The x position in the world frame in meters
    /// * 'y' - The y position in the world frame in meters
    /// * 'rotation' - The heading in the world frame
    pub fn new(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self::from_parts(Translation2d::new(x, y), rotation)
    }

    /// Returns the pose that results from applying `transform` to the current pose.
    ///
    /// The translation of the transform is rotated into the world frame by the current heading
    /// before it is added, and the rotations are composed.
    pub fn plus(&self, transform: &Transform2d) -> Self {
        Self {
            translation: self
                .translation
                .plus(&transform.translation().rotate_by(&self.rotation)),
            rotation: self.rotation.plus(transform.rotation()),
        }
    }

    /// Returns the current pose expressed in the frame of `other`.
    pub fn relative_to(&self, other: &Pose2d) -> Self {
        let transform = Transform2d::from_poses(other, self);
        Self {
            translation: *transform.translation(),
            rotation: *transform.rotation(),
        }
    }

    /// Returns the pose rotated about the world origin by `rotation`.
    ///
    /// Both the position and the heading are rotated. This re-orients the frame the pose is
    /// expressed in and differs from [Pose2d::plus], which moves relative to the pose itself.
    pub fn rotate_by(&self, rotation: &Rotation2d) -> Self {
        Self {
            translation: self.translation.rotate_by(rotation),
            rotation: self.rotation.rotate_by(rotation),
        }
    }

    /// Returns the heading.
    pub fn rotation(&self) -> &Rotation2d {
        &self.rotation
    }

    /// Applies the transform to the pose. Identical to [Pose2d::plus].
    pub fn transform_by(&self, transform: &Transform2d) -> Self {
        self.plus(transform)
    }

    /// Returns the position.
    pub fn translation(&self) -> &Translation2d {
        &self.translation
    }

    /// Returns the x position in meters.
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    /// Returns the y position in meters.
    pub fn y(&self) -> f64 {
        self.translation.y()
    }
}

impl ApproxEq for Pose2d {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.translation.approx_eq(other.translation, margin)
            && self.rotation.approx_eq(other.rotation, margin)
    }
}

impl Add<Transform2d> for Pose2d {
    type Output = Pose2d;

    fn add(self, rhs: Transform2d) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Sub for Pose2d {
    type Output = Transform2d;

    fn sub(self, rhs: Pose2d) -> Self::Output {
        self.minus(&rhs)
    }
}
