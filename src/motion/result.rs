//! Evaluation results: location and velocity per group at one instant.

use heapless::Vec;

use crate::group::{Components, GroupSchema, GroupValue, Name, MAX_GROUPS};

/// Location and velocity of one group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupState {
    /// Current value (vector or orientation).
    pub location: GroupValue,
    /// Velocity vector. Rotational groups hold an angular velocity `[x, y, z]`
    /// expressed in the frame of the section's start orientation.
    pub velocity: Components,
}

/// Preallocated per-group snapshot, overwritten on every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationResult {
    names: Vec<Name, MAX_GROUPS>,
    states: Vec<GroupState, MAX_GROUPS>,
}

impl EvaluationResult {
    /// Create a result matching a schema, at zero/identity with zero velocity.
    pub fn new(schema: &GroupSchema) -> Self {
        let mut names = Vec::new();
        let mut states = Vec::new();
        for def in schema.iter() {
            let velocity_len = if def.is_rotational() { 3 } else { def.dimension() };
            let mut velocity = Components::new();
            velocity.resize(velocity_len, 0.0).ok();

            let _ = names.push(Name::try_from(def.name()).unwrap_or_default());
            let _ = states.push(GroupState {
                location: GroupValue::zero_for(def),
                velocity,
            });
        }
        Self { names, states }
    }

    /// Number of groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Check if the result holds no groups.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Get the state of a group by index.
    #[inline]
    pub fn state(&self, index: usize) -> Option<&GroupState> {
        self.states.get(index)
    }

    /// Get the state of a group by name.
    pub fn group(&self, name: &str) -> Option<&GroupState> {
        self.names
            .iter()
            .position(|n| n.as_str() == name)
            .and_then(|i| self.states.get(i))
    }

    /// Location of a group by name.
    pub fn location(&self, name: &str) -> Option<&GroupValue> {
        self.group(name).map(|s| &s.location)
    }

    /// Velocity of a group by name.
    pub fn velocity(&self, name: &str) -> Option<&[f64]> {
        self.group(name).map(|s| s.velocity.as_slice())
    }

    /// All states in schema order.
    #[inline]
    pub fn states(&self) -> &[GroupState] {
        &self.states
    }

    /// Mutable access for solvers writing the snapshot.
    #[inline]
    pub fn states_mut(&mut self) -> &mut [GroupState] {
        &mut self.states
    }
}
