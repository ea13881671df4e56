//! Defines the heading of a robot in the plane.
//!
//! The heading is stored as a unit complex number, i.e. as the (cos, sin) pair of the angle,
//! so that composing many rotations does not accumulate wrap-around errors. The angle in
//! radians is kept next to it for scaling and reporting.

extern crate nalgebra as na;

use std::ops::{Add, Mul, Neg, Sub};

use float_cmp::{ApproxEq, F64Margin};
use na::{Complex, UnitComplex};

#[cfg(test)]
#[path = "rotation2d_tests.rs"]
mod rotation2d_tests;

/// The magnitude below which a (cos, sin) pair is considered to have no direction.
const MINIMUM_DIRECTION_MAGNITUDE: f64 = 1e-6;

/// Defines a rotation in the plane, e.g. the heading of a robot.
///
/// Rotations compose like complex numbers: `a + b` is the rotation by `a` followed by
/// the rotation by `b`. The identity rotation is the [Default] value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation2d {
    /// The angle in radians. Not range reduced for rotations created from an angle.
    radians: f64,

    /// The unit complex number (cos, sin) that describes the rotation.
    value: UnitComplex<f64>,
}

impl Rotation2d {
    /// Returns the unit complex number that describes the rotation.
    pub(crate) fn as_unit_complex(&self) -> &UnitComplex<f64> {
        &self.value
    }

    /// Returns the cosine of the angle.
    pub fn cos(&self) -> f64 {
        self.value.cos_angle()
    }

    /// Returns the angle in degrees.
    pub fn degrees(&self) -> f64 {
        self.radians.to_degrees()
    }

    /// Creates a new rotation from a (cos, sin) pair.
    ///
    /// The pair does not have to be normalized. A finite pair with no meaningful length
    /// results in the identity rotation. A pair that is not finite results in a rotation
    /// whose components and angle are NaN.
    ///
    /// ## Parameters
    ///
    /// * 'cos' - The x component, or cosine, of the rotation
    /// * 'sin' - The y component, or sine, of the rotation
    pub fn from_cos_sin(cos: f64, sin: f64) -> Self {
        let magnitude = cos.hypot(sin);
        let value = if magnitude.is_finite() && magnitude <= MINIMUM_DIRECTION_MAGNITUDE {
            UnitComplex::identity()
        } else {
            UnitComplex::new_unchecked(Complex::new(cos / magnitude, sin / magnitude))
        };

        Self {
            radians: value.angle(),
            value,
        }
    }

    /// Creates a new rotation from an angle in degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self::from_radians(degrees.to_radians())
    }

    /// Creates a new rotation from an angle in radians.
    ///
    /// ## Parameters
    ///
    /// * 'radians' - The angle. The angle does not need to be range reduced.
    pub fn from_radians(radians: f64) -> Self {
        Self {
            radians,
            value: UnitComplex::new(radians),
        }
    }

    /// Returns the identity rotation.
    pub fn identity() -> Self {
        Self {
            radians: 0.0,
            value: UnitComplex::identity(),
        }
    }

    /// Returns the rotation that is the difference between the current rotation and `other`,
    /// i.e. `self + (-other)`.
    pub fn minus(&self, other: &Rotation2d) -> Self {
        self.plus(&other.unary_minus())
    }

    /// Returns the composition of the current rotation with `other`.
    ///
    /// Composition multiplies the unit complex numbers:
    /// (cos₁cos₂ − sin₁sin₂, sin₁cos₂ + cos₁sin₂). The product is renormalized so that
    /// cos² + sin² stays 1 over many compositions.
    pub fn plus(&self, other: &Rotation2d) -> Self {
        let mut value = self.value * other.value;
        value.renormalize();

        Self {
            radians: value.angle(),
            value,
        }
    }

    /// Returns the angle in radians.
    pub fn radians(&self) -> f64 {
        self.radians
    }

    /// Returns the current rotation rotated by `other`. Identical to [Rotation2d::plus].
    pub fn rotate_by(&self, other: &Rotation2d) -> Self {
        self.plus(other)
    }

    /// Returns the sine of the angle.
    pub fn sin(&self) -> f64 {
        self.value.sin_angle()
    }

    /// Returns the tangent of the angle.
    pub fn tan(&self) -> f64 {
        self.sin() / self.cos()
    }

    /// Returns the rotation with the angle multiplied by `scalar`.
    pub fn times(&self, scalar: f64) -> Self {
        Self::from_radians(self.radians * scalar)
    }

    /// Returns the inverse rotation, i.e. the rotation with the negated angle.
    pub fn unary_minus(&self) -> Self {
        Self {
            radians: -self.radians,
            value: self.value.inverse(),
        }
    }
}

impl Default for Rotation2d {
    fn default() -> Self {
        Self::identity()
    }
}

impl ApproxEq for Rotation2d {
    type Margin = F64Margin;

    /// Compares the (cos, sin) pairs, so angles that differ by a full turn are equal.
    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.cos().approx_eq(other.cos(), margin) && self.sin().approx_eq(other.sin(), margin)
    }
}

impl Add for Rotation2d {
    type Output = Rotation2d;

    fn add(self, rhs: Rotation2d) -> Self::Output {
        self.plus(&rhs)
    }
}

impl Sub for Rotation2d {
    type Output = Rotation2d;

    fn sub(self, rhs: Rotation2d) -> Self::Output {
        self.minus(&rhs)
    }
}

impl Neg for Rotation2d {
    type Output = Rotation2d;

    fn neg(self) -> Self::Output {
        self.unary_minus()
    }
}

impl Mul<f64> for Rotation2d {
    type Output = Rotation2d;

    fn mul(self, rhs: f64) -> Self::Output {
        self.times(rhs)
    }
}
