//! Sections: the synchronized motion between two adjacent waypoints.

use heapless::Vec;

use crate::error::{QueryError, Result};
use crate::group::MAX_GROUPS;

use super::phase::{Phase, PhaseKind};

/// Motion parameters of one group within a section.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupMotion {
    /// Distance between the section's waypoints for this group.
    pub distance: f64,
    /// Peak velocity after synchronization.
    pub max_velocity: f64,
    /// Acceleration after synchronization.
    pub max_acceleration: f64,
}

/// Record of a triangular-profile correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VelocityReduction {
    /// Group index.
    pub group: usize,
    /// Peak velocity requested by the waypoint.
    pub requested: f64,
    /// Peak velocity reachable over the section distance.
    pub reduced: f64,
}

/// Motion segment between waypoint `start_index` and `start_index + 1` of a path.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: usize,
    start_index: usize,
    phases: [Phase; 3],
    groups: Vec<GroupMotion, MAX_GROUPS>,
    slowest_group: usize,
    duration: f64,
    start_time: f64,
    reductions: Vec<VelocityReduction, MAX_GROUPS>,
}

impl Section {
    /// Create a section from its phases (in Acceleration, ConstantVelocity,
    /// Deceleration order) and per-group motion.
    ///
    /// The start time is zero until the path manager places the section.
    pub fn new(
        id: usize,
        start_index: usize,
        phases: [Phase; 3],
        groups: Vec<GroupMotion, MAX_GROUPS>,
        slowest_group: usize,
        duration: f64,
    ) -> Self {
        Self {
            id,
            start_index,
            phases,
            groups,
            slowest_group,
            duration,
            start_time: 0.0,
            reductions: Vec::new(),
        }
    }

    /// Attach the velocity reductions applied while building the section.
    pub fn with_reductions(mut self, reductions: Vec<VelocityReduction, MAX_GROUPS>) -> Self {
        self.reductions = reductions;
        self
    }

    /// Section id (0-based position in the trajectory).
    #[inline]
    pub fn id(&self) -> usize {
        self.id
    }

    /// Path index of the start waypoint.
    #[inline]
    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// Path index of the end waypoint.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start_index + 1
    }

    /// All three phases in order.
    #[inline]
    pub fn phases(&self) -> &[Phase; 3] {
        &self.phases
    }

    /// Get the phase of a given kind.
    #[inline]
    pub fn phase(&self, kind: PhaseKind) -> &Phase {
        &self.phases[kind.index()]
    }

    /// Find the phase active at an in-section time.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::PhaseNotFound` if `time` lies outside the section.
    pub fn phase_at(&self, time: f64) -> Result<&Phase> {
        self.phases
            .iter()
            .find(|phase| phase.contains(time))
            .ok_or_else(|| {
                QueryError::PhaseNotFound {
                    time,
                    duration: self.duration,
                }
                .into()
            })
    }

    /// Per-group motion parameters.
    #[inline]
    pub fn groups(&self) -> &[GroupMotion] {
        &self.groups
    }

    /// Motion parameters of a group by index.
    #[inline]
    pub fn group(&self, index: usize) -> Option<&GroupMotion> {
        self.groups.get(index)
    }

    /// Index of the group that determined the section duration.
    #[inline]
    pub fn slowest_group(&self) -> usize {
        self.slowest_group
    }

    /// Section duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Absolute start time in seconds.
    #[inline]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Absolute end time in seconds.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    pub(crate) fn set_start_time(&mut self, start_time: f64) {
        self.start_time = start_time;
    }

    /// Velocity reductions applied by the triangular-profile correction.
    #[inline]
    pub fn velocity_reductions(&self) -> &[VelocityReduction] {
        &self.reductions
    }
}
