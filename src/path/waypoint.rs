//! Waypoints: named locations holding a value and limits per group.

use heapless::Vec;

use crate::error::{truncated_name, PathError, Result};
use crate::group::{GroupSchema, GroupValue, Limits, Name, MAX_GROUPS};

use super::builder::WaypointBuilder;

/// Value and limits of one group at a waypoint.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupPoint {
    /// Target value of the group.
    pub value: GroupValue,
    /// Limits used while moving towards this waypoint.
    pub limits: Limits,
}

/// A named location of every group in the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Waypoint {
    /// Waypoint name.
    name: Name,
    /// 1-based position in its path, 0 until inserted.
    id: usize,
    /// One entry per schema group, in schema order.
    groups: Vec<GroupPoint, MAX_GROUPS>,
}

impl Waypoint {
    /// Start building a waypoint for a schema.
    pub fn builder<'a>(schema: &'a GroupSchema, name: &str) -> WaypointBuilder<'a> {
        WaypointBuilder::new(schema, name)
    }

    pub(crate) fn from_parts(name: Name, groups: Vec<GroupPoint, MAX_GROUPS>) -> Self {
        Self { name, id: 0, groups }
    }

    /// Get the waypoint name.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Get the 1-based id assigned by the path (0 if not inserted yet).
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    #[inline]
    pub(crate) fn set_id(&mut self, id: usize) {
        self.id = id;
    }

    /// Get the data of a group by index.
    #[inline]
    pub fn group(&self, index: usize) -> Option<&GroupPoint> {
        self.groups.get(index)
    }

    /// Get all group entries in schema order.
    #[inline]
    pub fn groups(&self) -> &[GroupPoint] {
        &self.groups
    }

    /// Get the value of a group by name.
    pub fn value(&self, schema: &GroupSchema, group: &str) -> Option<&GroupValue> {
        schema
            .index_of(group)
            .and_then(|i| self.groups.get(i))
            .map(|g| &g.value)
    }

    /// Check that this waypoint matches a schema exactly.
    ///
    /// # Errors
    ///
    /// Returns `PathError::SchemaMismatch` naming the first offending group.
    pub fn check_schema(&self, schema: &GroupSchema) -> Result<()> {
        if self.groups.len() != schema.len() {
            return Err(PathError::SchemaMismatch {
                waypoint: self.name.clone(),
                group: heapless::String::new(),
            }
            .into());
        }

        for (def, point) in schema.iter().zip(self.groups.iter()) {
            if !point.value.matches(def) {
                return Err(PathError::SchemaMismatch {
                    waypoint: self.name.clone(),
                    group: truncated_name(def.name()),
                }
                .into());
            }
        }

        Ok(())
    }
}
