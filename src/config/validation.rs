//! Configuration validation.

use crate::error::{ConfigError, Error, PathError, Result};

use super::SystemConfig;

/// Validate a system configuration.
///
/// Checks:
/// - Groups have a usable component list (rotational groups exactly four)
/// - Waypoint names are unique
/// - There are at least two waypoints
/// - Every waypoint defines exactly the configured groups, with valid
///   component counts, non-zero quaternions and positive limits
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    let schema = config.schema()?;

    for (i, waypoint) in config.waypoints.iter().enumerate() {
        let duplicate = config.waypoints[..i]
            .iter()
            .any(|other| other.name == waypoint.name);
        if duplicate {
            return Err(Error::Config(ConfigError::DuplicateWaypointName(
                waypoint.name.clone(),
            )));
        }
    }

    if config.waypoints.len() < 2 {
        return Err(Error::Path(PathError::NotEnoughWaypoints(
            config.waypoints.len(),
        )));
    }

    let path = config.path(&schema)?;
    path.validate(&schema)
}
