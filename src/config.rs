//! Defines the robot constants and reads them from TOML.
//!
//! Every value has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! [roller]
//! speed = 0.8
//!
//! [odometry]
//! initial_x = 1.0
//! initial_y = 0.5
//! initial_heading_in_radians = 1.5707963
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    geometry::{pose2d::Pose2d, rotation2d::Rotation2d},
    Error,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Defines the constants for the roller.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RollerConstants {
    /// The speed the roller is driven at when it is activated, as a fraction of full speed.
    #[serde(default = "default_roller_speed")]
    pub speed: f64,
}

impl Default for RollerConstants {
    fn default() -> Self {
        Self {
            speed: default_roller_speed(),
        }
    }
}

fn default_roller_speed() -> f64 {
    1.0
}

/// Defines where the odometry starts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OdometryConfig {
    /// The initial x position in meters.
    #[serde(default)]
    pub initial_x: f64,

    /// The initial y position in meters.
    #[serde(default)]
    pub initial_y: f64,

    /// The initial heading in radians.
    #[serde(default)]
    pub initial_heading_in_radians: f64,
}

impl OdometryConfig {
    /// Returns the initial pose.
    pub fn initial_pose(&self) -> Pose2d {
        Pose2d::new(
            self.initial_x,
            self.initial_y,
            Rotation2d::from_radians(self.initial_heading_in_radians),
        )
    }
}

/// Defines the complete set of robot constants.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RobotConfig {
    /// The roller constants.
    #[serde(default)]
    pub roller: RollerConstants,

    /// The odometry constants.
    #[serde(default)]
    pub odometry: OdometryConfig,
}

impl RobotConfig {
    /// Parses the configuration from a TOML document.
    ///
    /// ## Errors
    ///
    /// * [Error::FailedToReadConfiguration] - Returned when the document is not valid TOML or
    ///   does not match the configuration layout
    /// * [Error::InvalidConfiguration] - Returned when a value is not a finite number
    pub fn from_toml_str(document: &str) -> Result<Self, Error> {
        let config: RobotConfig =
            toml::from_str(document).map_err(|e| Error::FailedToReadConfiguration {
                source_name: "<string>".to_string(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Reads the configuration from a TOML file.
    ///
    /// ## Errors
    ///
    /// * [Error::FailedToReadConfiguration] - Returned when the file cannot be read or parsed
    /// * [Error::InvalidConfiguration] - Returned when a value is not a finite number
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let document =
            fs::read_to_string(path).map_err(|e| Error::FailedToReadConfiguration {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Self::from_toml_str(&document).map_err(|e| match e {
            Error::FailedToReadConfiguration { reason, .. } => Error::FailedToReadConfiguration {
                source_name: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Serializes the configuration to a TOML document.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when the configuration cannot be serialized
    pub fn to_toml_string(&self) -> Result<String, Error> {
        toml::to_string(self).map_err(|e| Error::InvalidConfiguration {
            reason: e.to_string(),
        })
    }

    /// Checks that all values can be used by the pose algebra and the actuators.
    fn validate(&self) -> Result<(), Error> {
        let values = [
            ("roller.speed", self.roller.speed),
            ("odometry.initial_x", self.odometry.initial_x),
            ("odometry.initial_y", self.odometry.initial_y),
            (
                "odometry.initial_heading_in_radians",
                self.odometry.initial_heading_in_radians,
            ),
        ];

        for (name, value) in values {
            if !value.is_finite() {
                return Err(Error::InvalidConfiguration {
                    reason: format!("{} must be a finite number, got {}", name, value),
                });
            }
        }

        Ok(())
    }
}
