//! Waypoints as written in configuration.

use heapless::{FnvIndexMap, String, Vec};
use serde::Deserialize;

use crate::group::{Limits, MAX_COMPONENTS, MAX_GROUPS};

/// Value and limits of one group at a waypoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupPointConfig {
    /// Components, `[w, x, y, z]` for rotational groups.
    pub value: Vec<f64, MAX_COMPONENTS>,

    /// Maximum velocity when approaching this waypoint.
    pub max_velocity: f64,

    /// Maximum acceleration when approaching this waypoint.
    pub max_acceleration: f64,
}

impl GroupPointConfig {
    /// Limits of this group point.
    #[inline]
    pub fn limits(&self) -> Limits {
        Limits::new(self.max_velocity, self.max_acceleration)
    }
}

/// One `[[waypoints]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WaypointConfig {
    /// Unique waypoint name.
    pub name: String<32>,

    /// Per-group values, keyed by group name.
    pub groups: FnvIndexMap<String<32>, GroupPointConfig, MAX_GROUPS>,
}

impl WaypointConfig {
    /// Get the entry of a group by name.
    pub fn group(&self, name: &str) -> Option<&GroupPointConfig> {
        self.groups
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }
}
