use std::ops::{Add, Div, Mul};

use float_cmp::{ApproxEq, F64Margin};

use super::{pose2d::Pose2d, rotation2d::Rotation2d, translation2d::Translation2d};

#[cfg(test)]
#[path = "transform2d_tests.rs"]
mod transform2d_tests;

/// Defines the displacement from one pose to another.
///
/// The displacement is expressed in the frame of the pose it is applied to, i.e. the
/// translation is measured along the axes of the starting pose, not along the world axes.
/// The identity transform is the [Default] value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform2d {
    /// The translation, in the frame of the starting pose.
    translation: Translation2d,

    /// The change in heading.
    rotation: Rotation2d,
}

impl Transform2d {
    /// Returns the transform with both components divided by `scalar`.
    pub fn div(&self, scalar: f64) -> Self {
        self.times(1.0 / scalar)
    }

    /// Creates a new [Transform2d] from the translation components and a rotation.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The x component of the translation in meters
    /// * 'y' - The y component of the translation in meters
    /// * 'rotation' - The change in heading
    pub fn from_coordinates(x: f64, y: f64, rotation: Rotation2d) -> Self {
        Self::new(Translation2d::new(x, y), rotation)
    }

    /// Creates the transform that maps the `initial` pose onto the `last` pose, i.e.
    /// `initial + result == last`.
    ///
    /// The world frame difference between the two translations is rotated by the inverse of
    /// the heading of `initial` so that the result is expressed in the frame of `initial`.
    ///
    /// ## Parameters
    ///
    /// * 'initial' - The pose the transform starts from
    /// * 'last' - The pose the transform ends at
    pub fn from_poses(initial: &Pose2d, last: &Pose2d) -> Self {
        let translation = last.translation().minus(initial.translation());
        let rotation = last.rotation().minus(initial.rotation());

        Self {
            translation: translation.rotate_by(&initial.rotation().unary_minus()),
            rotation,
        }
    }

    /// Returns the transform that undoes the current transform, i.e. `t + t.inverse()` is the
    /// identity transform.
    pub fn inverse(&self) -> Self {
        let inverse_rotation = self.rotation.unary_minus();
        Self {
            translation: self
                .translation
                .unary_minus()
                .rotate_by(&inverse_rotation),
            rotation: inverse_rotation,
        }
    }

    /// Creates a new [Transform2d] instance.
    ///
    /// ## Parameters
    ///
    /// * 'translation' - The translation in the frame of the starting pose
    /// * 'rotation' - The change in heading
    pub fn new(translation: Translation2d, rotation: Rotation2d) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Returns the composition of the current transform followed by `other`.
    ///
    /// `other` is interpreted in the frame that results from applying the current transform,
    /// so composition is associative but not commutative.
    pub fn plus(&self, other: &Transform2d) -> Self {
        let initial = Pose2d::default();
        let last = initial.plus(self).plus(other);
        Self::from_poses(&initial, &last)
    }

    /// Returns the rotation component.
    pub fn rotation(&self) -> &Rotation2d {
        &self.rotation
    }

    /// Returns the transform with the translation and the rotation angle multiplied by `scalar`.
    pub fn times(&self, scalar: f64) -> Self {
        Self {
            translation: self.translation.times(scalar),
            rotation: self.rotation.times(scalar),
        }
    }

    /// Returns the translation component.
    pub fn translation(&self) -> &Translation2d {
        &self.translation
    }

    /// Returns the x component of the translation.
    pub fn x(&self) -> f64 {
        self.translation.x()
    }

    /// Returns the y component of the translation.
    pub fn y(&self) -> f64 {
        self.translation.y()
    }
}

impl ApproxEq for Transform2d {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.translation.approx_eq(other.translation, margin)
            && self.rotation.approx_eq(other.rotation, margin)
    }
}

impl Add for Transform2d {
    type Output = Transform2d;

    fn add(self, rhs: Transform2d) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Mul<f64> for Transform2d {
    type Output = Transform2d;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times(rhs)
    }
}

impl Div<f64> for Transform2d {
    type Output = Transform2d;

    fn div(self, rhs: f64) -> Self::Output {
        self.times(1.0 / rhs)
    }
}
