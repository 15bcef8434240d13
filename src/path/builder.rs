//! Waypoint builder for programmatic waypoint creation.

use heapless::Vec;

use crate::error::{truncated_name, ConfigError, Error, PathError, Result};
use crate::group::{all_finite, GroupSchema, GroupValue, Limits, Name, MAX_GROUPS};

use super::waypoint::{GroupPoint, Waypoint};

/// Builder for waypoints conforming to a [`GroupSchema`].
///
/// Setters never fail; the first problem is reported by [`build`](Self::build).
///
/// ```rust,ignore
/// let p1 = Waypoint::builder(&schema, "p1")
///     .linear("pos", &[0.0, 0.0, 0.0], Limits::new(1.0, 1.0))
///     .rotation("rot", [1.0, 0.0, 0.0, 0.0], Limits::new(1.0, 1.0))
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct WaypointBuilder<'a> {
    schema: &'a GroupSchema,
    name: Option<Name>,
    groups: Vec<Option<GroupPoint>, MAX_GROUPS>,
    error: Option<Error>,
}

impl<'a> WaypointBuilder<'a> {
    /// Create a new waypoint builder.
    pub fn new(schema: &'a GroupSchema, name: &str) -> Self {
        let mut groups = Vec::new();
        for _ in 0..schema.len() {
            let _ = groups.push(None);
        }

        let (name, error) = match Name::try_from(name) {
            Ok(name) => (Some(name), None),
            Err(_) => (None, Some(Error::Config(ConfigError::NameTooLong))),
        };

        Self {
            schema,
            name,
            groups,
            error,
        }
    }

    /// Set the value and limits of a linear group.
    pub fn linear(self, group: &str, values: &[f64], limits: Limits) -> Self {
        if !all_finite(values) {
            return self.fail(ConfigError::NonFiniteValue(truncated_name(group)));
        }
        match GroupValue::linear(values) {
            Ok(value) => self.value(group, value, limits),
            Err(_) => self.fail(ConfigError::InvalidComponentCount {
                group: truncated_name(group),
                count: values.len(),
            }),
        }
    }

    /// Set the orientation (`[w, x, y, z]`, normalized on build) and limits of a rotational group.
    pub fn rotation(self, group: &str, wxyz: [f64; 4], limits: Limits) -> Self {
        if !all_finite(&wxyz) {
            return self.fail(ConfigError::NonFiniteValue(truncated_name(group)));
        }
        match GroupValue::rotation(wxyz[0], wxyz[1], wxyz[2], wxyz[3]) {
            Some(value) => self.value(group, value, limits),
            None => self.fail(ConfigError::InvalidOrientation(truncated_name(group))),
        }
    }

    /// Set the components of a group as given in configuration.
    ///
    /// Rotational groups take `[w, x, y, z]`.
    pub fn components(self, group: &str, values: &[f64], limits: Limits) -> Self {
        let rotational = self
            .schema
            .index_of(group)
            .and_then(|i| self.schema.get(i))
            .map(|def| def.is_rotational())
            .unwrap_or(false);

        if rotational {
            match values {
                [w, x, y, z] => self.rotation(group, [*w, *x, *y, *z], limits),
                _ => self.fail(ConfigError::InvalidComponentCount {
                    group: truncated_name(group),
                    count: values.len(),
                }),
            }
        } else {
            self.linear(group, values, limits)
        }
    }

    /// Set a group from an already constructed value.
    pub fn value(mut self, group: &str, value: GroupValue, limits: Limits) -> Self {
        if self.error.is_some() {
            return self;
        }

        let index = match self.schema.require(group) {
            Ok(index) => index,
            Err(e) => {
                self.error = Some(e);
                return self;
            }
        };

        if let Err(e) = limits.validate() {
            self.error = Some(e);
            return self;
        }

        if !value.is_finite() {
            return self.fail(ConfigError::NonFiniteValue(truncated_name(group)));
        }

        let fits = self.schema.get(index).map(|def| value.matches(def)).unwrap_or(false);
        if !fits {
            let count = value.components().len();
            return self.fail(ConfigError::InvalidComponentCount {
                group: truncated_name(group),
                count,
            });
        }

        if let Some(slot) = self.groups.get_mut(index) {
            *slot = Some(GroupPoint { value, limits });
        }
        self
    }

    fn fail(mut self, error: ConfigError) -> Self {
        if self.error.is_none() {
            self.error = Some(Error::Config(error));
        }
        self
    }

    /// Build the waypoint.
    ///
    /// # Errors
    ///
    /// Returns the first setter error, or `PathError::SchemaMismatch` if a
    /// schema group was never set.
    pub fn build(self) -> Result<Waypoint> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let name = self.name.unwrap_or_default();
        let mut groups = Vec::new();
        for (def, slot) in self.schema.iter().zip(self.groups) {
            let point = slot.ok_or_else(|| PathError::SchemaMismatch {
                waypoint: name.clone(),
                group: truncated_name(def.name()),
            })?;
            let _ = groups.push(point);
        }

        Ok(Waypoint::from_parts(name, groups))
    }
}
