//! Ordered waypoint list.

use heapless::Vec;

use crate::error::{truncated_name, PathError, Result};
use crate::group::GroupSchema;

use super::waypoint::Waypoint;

/// Maximum number of waypoints in a path.
pub const MAX_WAYPOINTS: usize = 32;

/// Ordered list of waypoints; ids are assigned on insertion starting at 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    waypoints: Vec<Waypoint, MAX_WAYPOINTS>,
}

impl Path {
    /// Create an empty path.
    pub fn new() -> Self {
        Self {
            waypoints: Vec::new(),
        }
    }

    /// Append a waypoint, returning its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `PathError::TooManyWaypoints` if the path is full.
    pub fn add_point(&mut self, mut waypoint: Waypoint) -> Result<usize> {
        let id = self.waypoints.len() + 1;
        waypoint.set_id(id);
        self.waypoints
            .push(waypoint)
            .map_err(|_| PathError::TooManyWaypoints)?;
        Ok(id)
    }

    /// Chainable form of [`add_point`](Self::add_point).
    pub fn with_point(mut self, waypoint: Waypoint) -> Result<Self> {
        self.add_point(waypoint)?;
        Ok(self)
    }

    /// Append copies of every waypoint of `other`, renumbering them.
    pub fn extend(&mut self, other: &Path) -> Result<()> {
        if self.len() + other.len() > MAX_WAYPOINTS {
            return Err(PathError::TooManyWaypoints.into());
        }
        for waypoint in other.iter() {
            self.add_point(waypoint.clone())?;
        }
        Ok(())
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Check if the path is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Get a waypoint by 0-based index.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Waypoint> {
        self.waypoints.get(index)
    }

    /// Get a waypoint by name.
    ///
    /// # Errors
    ///
    /// Returns `PathError::WaypointNotFound` if no waypoint has this name.
    pub fn point(&self, name: &str) -> Result<&Waypoint> {
        self.waypoints
            .iter()
            .find(|w| w.name() == name)
            .ok_or_else(|| PathError::WaypointNotFound(truncated_name(name)).into())
    }

    /// Iterate over the waypoints in order.
    pub fn iter(&self) -> impl Iterator<Item = &Waypoint> {
        self.waypoints.iter()
    }

    /// Check that the path can be turned into sections for a schema.
    ///
    /// # Errors
    ///
    /// Returns `PathError::NotEnoughWaypoints` for fewer than two waypoints and
    /// `PathError::SchemaMismatch` for the first waypoint not matching `schema`.
    pub fn validate(&self, schema: &GroupSchema) -> Result<()> {
        if self.waypoints.len() < 2 {
            return Err(PathError::NotEnoughWaypoints(self.waypoints.len()).into());
        }
        for waypoint in self.waypoints.iter() {
            waypoint.check_schema(schema)?;
        }
        Ok(())
    }
}
