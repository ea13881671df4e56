use float_cmp::{ApproxEq, F64Margin};

/// Defines a small displacement in the local frame of a pose, e.g. the motion measured by the
/// odometry over one control cycle.
///
/// A twist is consumed once by [Pose2d::exp](super::pose2d::Pose2d::exp), which assumes the
/// displacement was made at a constant velocity over the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Twist2d {
    /// The forward displacement in meters.
    dx: f64,

    /// The sideways displacement in meters.
    dy: f64,

    /// The change in heading in radians.
    dtheta: f64,
}

impl Twist2d {
    /// Returns the change in heading in radians.
    pub fn dtheta(&self) -> f64 {
        self.dtheta
    }

    /// Returns the forward displacement in meters.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Returns the sideways displacement in meters.
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Creates a new [Twist2d] instance.
    ///
    /// ## Parameters
    ///
    /// * 'dx' - The forward displacement in meters
    /// * 'dy' - The sideways displacement in meters
    /// * 'dtheta' - The change in heading in radians
    pub fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }
}

impl ApproxEq for Twist2d {
    type Margin = F64Margin;

    fn approx_eq<M: Into<Self::Margin>>(self, other: Self, margin: M) -> bool {
        let margin = margin.into();
        self.dx.approx_eq(other.dx, margin)
            && self.dy.approx_eq(other.dy, margin)
            && self.dtheta.approx_eq(other.dtheta, margin)
    }
}
