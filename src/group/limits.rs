//! Per-waypoint kinematic limits of a group.

use serde::Deserialize;

use crate::error::{ConfigError, Result};

/// Maximum velocity and acceleration a group may use when approaching a waypoint.
///
/// Units follow the group: distance units per second for linear groups,
/// radians per second for rotational groups.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Limits {
    /// Maximum velocity.
    pub max_velocity: f64,
    /// Maximum acceleration (also used for deceleration).
    pub max_acceleration: f64,
}

impl Limits {
    /// Create new limits.
    pub const fn new(max_velocity: f64, max_acceleration: f64) -> Self {
        Self {
            max_velocity,
            max_acceleration,
        }
    }

    /// Check that both limits are finite and strictly positive.
    pub fn validate(&self) -> Result<()> {
        if !self.max_velocity.is_finite() || self.max_velocity <= 0.0 {
            return Err(ConfigError::InvalidMaxVelocity(self.max_velocity).into());
        }
        if !self.max_acceleration.is_finite() || self.max_acceleration <= 0.0 {
            return Err(ConfigError::InvalidMaxAcceleration(self.max_acceleration).into());
        }
        Ok(())
    }

    /// Limits scaled by a common factor.
    #[inline]
    pub fn scaled(self, factor: f64) -> Self {
        Self::new(self.max_velocity * factor, self.max_acceleration * factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_validate() {
        assert!(Limits::new(1.0, 2.0).validate().is_ok());
        assert!(matches!(
            Limits::new(0.0, 2.0).validate(),
            Err(Error::Config(ConfigError::InvalidMaxVelocity(_)))
        ));
        assert!(matches!(
            Limits::new(1.0, f64::NAN).validate(),
            Err(Error::Config(ConfigError::InvalidMaxAcceleration(_)))
        ));
    }

    #[test]
    fn test_scaled() {
        let limits = Limits::new(2.0, 4.0).scaled(0.25);
        assert_eq!(limits, Limits::new(0.5, 1.0));
    }
}
