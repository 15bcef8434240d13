//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String, Vec};
use serde::Deserialize;

use crate::error::Result;
use crate::group::{GroupSchema, MAX_GROUPS};
use crate::motion::Solver;
use crate::path::{Path, Waypoint, MAX_WAYPOINTS};

use super::group::GroupConfig;
use super::waypoint::WaypointConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemConfig {
    /// Profile algorithm.
    #[serde(default)]
    pub solver: Solver,

    /// Named groups, in schema order.
    pub groups: FnvIndexMap<String<32>, GroupConfig, MAX_GROUPS>,

    /// Waypoints in path order.
    #[serde(default)]
    pub waypoints: Vec<WaypointConfig, MAX_WAYPOINTS>,
}

impl SystemConfig {
    /// Get a group configuration by name.
    pub fn group(&self, name: &str) -> Option<&GroupConfig> {
        self.groups
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// Get a waypoint configuration by name.
    pub fn waypoint(&self, name: &str) -> Option<&WaypointConfig> {
        self.waypoints.iter().find(|w| w.name.as_str() == name)
    }

    /// List all group names, in schema order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(|s| s.as_str())
    }

    /// List all waypoint names, in path order.
    pub fn waypoint_names(&self) -> impl Iterator<Item = &str> {
        self.waypoints.iter().map(|w| w.name.as_str())
    }

    /// Build the group schema.
    ///
    /// # Errors
    ///
    /// Returns an error if a group has an invalid component list.
    pub fn schema(&self) -> Result<GroupSchema> {
        let mut schema = GroupSchema::new();
        for (name, group) in self.groups.iter() {
            schema.add(group.to_def(name.as_str())?)?;
        }
        Ok(schema)
    }

    /// Build the path of all waypoints against `schema`.
    ///
    /// # Errors
    ///
    /// Returns an error if a waypoint names an unknown group, misses a group,
    /// or has invalid values or limits.
    pub fn path(&self, schema: &GroupSchema) -> Result<Path> {
        let mut path = Path::new();
        for config in self.waypoints.iter() {
            let mut builder = Waypoint::builder(schema, config.name.as_str());
            for (group, point) in config.groups.iter() {
                builder = builder.components(group.as_str(), &point.value, point.limits());
            }
            path.add_point(builder.build()?)?;
        }
        Ok(path)
    }
}
