//! Phases: the constant-kinematic regimes of a section.

use heapless::Vec;

use crate::group::MAX_GROUPS;
use crate::numeric::{nearly_zero, EPSILON};

/// Kinematic regime of a phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    /// Accelerating from rest toward the peak velocity.
    Acceleration,
    /// Moving at constant peak velocity.
    ConstantVelocity,
    /// Decelerating from the peak velocity to rest.
    Deceleration,
}

impl PhaseKind {
    /// All kinds in section order.
    pub const ALL: [PhaseKind; 3] = [
        PhaseKind::Acceleration,
        PhaseKind::ConstantVelocity,
        PhaseKind::Deceleration,
    ];

    /// Position of this kind within a section.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            PhaseKind::Acceleration => 0,
            PhaseKind::ConstantVelocity => 1,
            PhaseKind::Deceleration => 2,
        }
    }

    /// Name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            PhaseKind::Acceleration => "Acceleration",
            PhaseKind::ConstantVelocity => "ConstantVelocity",
            PhaseKind::Deceleration => "Deceleration",
        }
    }

    /// Distance travelled and signed velocity `t` seconds into a phase of this kind.
    ///
    /// `offset` is the distance already covered when the phase starts; it is
    /// ignored by the acceleration phase, which always starts at rest.
    pub fn kinematics(self, t: f64, acceleration: f64, max_velocity: f64, offset: f64) -> (f64, f64) {
        match self {
            PhaseKind::Acceleration => (0.5 * acceleration * t * t, acceleration * t),
            PhaseKind::ConstantVelocity => (max_velocity * t + offset, max_velocity),
            PhaseKind::Deceleration => (
                -0.5 * acceleration * t * t + max_velocity * t + offset,
                -acceleration * t + max_velocity,
            ),
        }
    }
}

/// Timing of a single group within one phase.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseComponent {
    /// Time the group spends in the phase.
    pub duration: f64,
    /// Distance the group covers in the phase.
    pub length: f64,
    /// Distance the group has covered in the section before the phase begins.
    pub start_offset: f64,
}

/// One kinematic regime of a section, with a component per group.
#[derive(Debug, Clone, PartialEq)]
pub struct Phase {
    /// Regime of this phase.
    pub kind: PhaseKind,
    /// Per-group timing, in schema order.
    pub components: Vec<PhaseComponent, MAX_GROUPS>,
    /// Duration shared by all non-degenerate groups.
    pub duration: f64,
    /// Euclidean norm of the component lengths.
    pub length: f64,
    /// Start time relative to the section start.
    pub t_start: f64,
    /// Sum of the lengths of the preceding phases.
    pub distance_from_section_start: f64,
}

impl Phase {
    /// Create an empty phase of the given kind.
    pub fn new(kind: PhaseKind) -> Self {
        Self {
            kind,
            components: Vec::new(),
            duration: 0.0,
            length: 0.0,
            t_start: 0.0,
            distance_from_section_start: 0.0,
        }
    }

    /// End time relative to the section start.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.t_start + self.duration
    }

    /// Check if an in-section time falls within this phase, boundaries included.
    #[inline]
    pub fn contains(&self, time: f64) -> bool {
        time >= self.t_start - EPSILON && time <= self.end_time() + EPSILON
    }

    /// Get the component of a group by index.
    #[inline]
    pub fn component(&self, group: usize) -> Option<&PhaseComponent> {
        self.components.get(group)
    }

    /// Derive the phase duration and length from the components.
    ///
    /// The duration is the first component duration that is not nearly zero;
    /// synchronized groups all share it, degenerate groups report zero.
    pub fn settle(&mut self) {
        self.duration = self
            .components
            .iter()
            .map(|c| c.duration)
            .find(|d| !nearly_zero(*d))
            .unwrap_or(0.0);

        let sum: f64 = self.components.iter().map(|c| c.length * c.length).sum();
        self.length = libm::sqrt(sum);
    }
}
