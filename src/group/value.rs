//! Group values and the arithmetic the solver needs on them.

use heapless::Vec;
use libm::sqrt;
use nalgebra::{Quaternion, UnitQuaternion};

use crate::error::{ConfigError, Result};
use crate::numeric::{nearly_zero, EPSILON};

use super::schema::{GroupDef, MAX_COMPONENTS};

/// Fixed-capacity component vector.
pub type Components = Vec<f64, MAX_COMPONENTS>;

/// Value of one group at a waypoint or at an evaluated instant.
#[derive(Debug, Clone, PartialEq)]
pub enum GroupValue {
    /// Cartesian vector with one entry per component.
    Linear(Components),
    /// Orientation.
    Rotation(UnitQuaternion<f64>),
}

impl GroupValue {
    /// Create a linear value.
    ///
    /// # Errors
    ///
    /// Returns an error if `values` exceeds [`MAX_COMPONENTS`] or holds a
    /// NaN or infinite entry.
    pub fn linear(values: &[f64]) -> Result<Self> {
        if !all_finite(values) {
            return Err(ConfigError::NonFiniteValue(heapless::String::new()).into());
        }
        let components = Components::from_slice(values).map_err(|_| {
            ConfigError::InvalidComponentCount {
                group: heapless::String::new(),
                count: values.len(),
            }
        })?;
        Ok(GroupValue::Linear(components))
    }

    /// Create an orientation from `[w, x, y, z]`, normalizing it.
    ///
    /// Returns `None` for a zero-norm or non-finite quaternion.
    pub fn rotation(w: f64, x: f64, y: f64, z: f64) -> Option<Self> {
        if !all_finite(&[w, x, y, z]) {
            return None;
        }
        UnitQuaternion::try_new(Quaternion::new(w, x, y, z), EPSILON).map(GroupValue::Rotation)
    }

    /// Zero vector or identity orientation matching a group definition.
    pub fn zero_for(def: &GroupDef) -> Self {
        if def.is_rotational() {
            GroupValue::Rotation(UnitQuaternion::identity())
        } else {
            let mut components = Components::new();
            components.resize(def.dimension(), 0.0).ok();
            GroupValue::Linear(components)
        }
    }

    /// Check if every component is finite.
    pub fn is_finite(&self) -> bool {
        all_finite(&self.components())
    }

    /// Check if this value fits a group definition.
    pub fn matches(&self, def: &GroupDef) -> bool {
        match self {
            GroupValue::Linear(c) => !def.is_rotational() && c.len() == def.dimension(),
            GroupValue::Rotation(_) => def.is_rotational(),
        }
    }

    /// Components of the value; orientations are returned as `[w, x, y, z]`.
    pub fn components(&self) -> Components {
        match self {
            GroupValue::Linear(c) => c.clone(),
            GroupValue::Rotation(q) => {
                let mut c = Components::new();
                let _ = c.extend_from_slice(&[q.w, q.i, q.j, q.k]);
                c
            }
        }
    }

    /// Get the linear components, if this is a linear value.
    pub fn as_linear(&self) -> Option<&[f64]> {
        match self {
            GroupValue::Linear(c) => Some(c),
            GroupValue::Rotation(_) => None,
        }
    }

    /// Get the orientation, if this is a rotational value.
    pub fn as_rotation(&self) -> Option<&UnitQuaternion<f64>> {
        match self {
            GroupValue::Rotation(q) => Some(q),
            GroupValue::Linear(_) => None,
        }
    }

    /// Distance to another value of the same kind.
    ///
    /// Euclidean norm of the difference for linear values, shortest relative
    /// rotation angle in radians for orientations. Values of different kinds
    /// are a schema violation and yield 0.
    pub fn distance_to(&self, other: &GroupValue) -> f64 {
        match (self, other) {
            (GroupValue::Linear(a), GroupValue::Linear(b)) => {
                let sum: f64 = a.iter().zip(b.iter()).map(|(x, y)| (y - x) * (y - x)).sum();
                sqrt(sum)
            }
            (GroupValue::Rotation(a), GroupValue::Rotation(b)) => a.angle_to(b),
            _ => 0.0,
        }
    }

    /// Value at `fraction` of the way to `other`.
    ///
    /// Linear interpolation for vectors, spherical linear interpolation for
    /// orientations.
    pub fn interpolate(&self, other: &GroupValue, fraction: f64) -> GroupValue {
        match (self, other) {
            (GroupValue::Linear(a), GroupValue::Linear(b)) => {
                GroupValue::Linear(a.iter().zip(b.iter()).map(|(x, y)| x + (y - x) * fraction).collect())
            }
            (GroupValue::Rotation(a), GroupValue::Rotation(b)) => {
                let q = a
                    .try_slerp(b, fraction, EPSILON)
                    .unwrap_or(if fraction < 0.5 { *a } else { *b });
                GroupValue::Rotation(q)
            }
            _ => self.clone(),
        }
    }

    /// Unit direction of motion towards `other`.
    ///
    /// For linear values this is the normalized difference vector. For
    /// orientations it is the axis of the relative rotation `self⁻¹ · other`,
    /// expressed in the frame of `self` (three components). A zero vector is
    /// returned when the values coincide.
    pub fn direction_to(&self, other: &GroupValue) -> Components {
        match (self, other) {
            (GroupValue::Linear(a), GroupValue::Linear(b)) => {
                let distance = self.distance_to(other);
                a.iter()
                    .zip(b.iter())
                    .map(|(x, y)| if nearly_zero(distance) { 0.0 } else { (y - x) / distance })
                    .collect()
            }
            (GroupValue::Rotation(a), GroupValue::Rotation(b)) => {
                let mut c = Components::new();
                match (a.inverse() * b).axis() {
                    Some(axis) => {
                        let _ = c.extend_from_slice(&[axis.x, axis.y, axis.z]);
                    }
                    None => {
                        let _ = c.extend_from_slice(&[0.0, 0.0, 0.0]);
                    }
                }
                c
            }
            _ => Components::new(),
        }
    }
}

/// Check that no value is NaN or infinite.
pub(crate) fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}
