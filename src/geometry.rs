/// Defines the heading of a robot in the plane
pub mod rotation2d;

/// Defines a vector in the plane
pub mod translation2d;

/// Defines the relative displacement between two poses
pub mod transform2d;

/// Defines the absolute position and heading of a robot
pub mod pose2d;

/// Defines an incremental local frame displacement
pub mod twist2d;
