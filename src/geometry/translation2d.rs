extern crate nalgebra as na;

use std::ops::{Add, Div, Mul, Neg, Sub};

use float_cmp::{ApproxEq, F64Margin};
use na::Vector2;

use super::rotation2d::Rotation2d;

#[cfg(test)]
#[path = "translation2d_tests.rs"]
mod translation2d_tests;

/// Defines a vector in the plane, in meters.
///
/// Used both as a position in the world frame and as an offset in a robot frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation2d {
    /// The (x, y) components of the vector.
    vector: Vector2<f64>,
}

impl Translation2d {
    /// Returns the distance between the current translation and `other`.
    pub fn distance(&self, other: &Translation2d) -> f64 {
        (other.vector - self.vector).norm()
    }

    /// Returns the translation with both components divided by `scalar`.
    pub fn div(&self, scalar: f64) -> Self {
        self.times(1.0 / scalar)
    }

    /// Returns the difference between the current translation and `other`.
    pub fn minus(&self, other: &Translation2d) -> Self {
        Self {
            vector: self.vector - other.vector,
        }
    }

    /// Creates a new [Translation2d] instance.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The x component in meters
    /// * 'y' - The y component in meters
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            vector: Vector2::new(x, y),
        }
    }

    /// Returns the length of the vector.
    pub fn norm(&self) -> f64 {
        self.vector.norm()
    }

    /// Returns the sum of the current translation and `other`.
    pub fn plus(&self, other: &Translation2d) -> Self {
        Self {
            vector: self.vector + other.vector,
        }
    }

    /// Returns the translation rotated counter-clockwise by `rotation` about the origin.
    ///
    /// Applies the rotation matrix: x' = x·cosθ − y·sinθ, y' = x·sinθ + y·cosθ.
    pub fn rotate_by(&self, rotation: &Rotation2d) -> Self {
        Self {
            vector: *rotation.as_unit_complex() * self.vector,
        }
    }

    /// Returns the translation with both components multiplied by `scalar`.
    pub fn times(&self, scalar: f64) -> Self {
        Self {
            vector: self.vector * scalar,
        }
    }

    /// Returns the translation pointing in the opposite direction.
    pub fn unary_minus(&self) -> Self {
        Self {
            vector: -self.vector,
        }
    }

    /// Returns the x component in meters.
    pub fn x(&self) -> f64 {
        self.vector.x
    }

    /// Returns the y component in meters.
    pub fn y(&self) -> f64 {
        self.vector.y
    }
}

impl ApproxEq for Translation2d {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.x().approx_eq(other.x(), margin) && self.y().approx_eq(other.y(), margin)
    }
}

impl Add for Translation2d {
    type Output = Translation2d;

    fn add(self, rhs: Translation2d) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Sub for Translation2d {
    type Output = Translation2d;

    fn sub(self, rhs: Translation2d) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Neg for Translation2d {
    type Output = Translation2d;

    fn neg(self) -> Self::Output {
        self.unary_minus()
    }
}

impl Mul<f64> for Translation2d {
    type Output = Translation2d;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times(rhs)
    }
}

impl Div<f64> for Translation2d {
    type Output = Translation2d;

    fn div(self, rhs: f64) -> Self::Output {
        self.times(1.0 / rhs)
    }
}
