//! Single-group trapezoidal profile calculation.
//!
//! Provides symmetric bang-coast-bang timing for one group, with the
//! triangular-profile correction applied when the requested peak velocity
//! cannot be reached over the available distance.

use libm::sqrt;

use crate::numeric::{nearly_zero, EPSILON};

use super::phase::PhaseComponent;

/// Timing of one group moving over a fixed distance from rest to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrapezoidalProfile {
    /// Distance to cover (non-negative).
    pub distance: f64,

    /// Peak velocity actually used.
    pub max_velocity: f64,

    /// Acceleration rate, also used for deceleration.
    pub acceleration: f64,

    /// Acceleration phase.
    pub accel: PhaseComponent,

    /// Constant-velocity phase.
    pub coast: PhaseComponent,

    /// Deceleration phase.
    pub decel: PhaseComponent,
}

impl TrapezoidalProfile {
    /// Compute the symmetric profile for the given limits without any correction.
    ///
    /// The coast length comes out negative when `max_velocity` cannot be
    /// reached over `distance`; see [`needs_reduction`](Self::needs_reduction).
    pub fn symmetric(distance: f64, max_velocity: f64, acceleration: f64) -> Self {
        // Time to reach max velocity: t = v_max / a
        // Distance during acceleration: d = 0.5 * a * t²
        let (t_accel, accel_length) = if nearly_zero(acceleration) {
            (0.0, 0.0)
        } else {
            let t = max_velocity / acceleration;
            (t, 0.5 * acceleration * t * t)
        };

        let t_decel = if nearly_zero(max_velocity) { 0.0 } else { t_accel };
        let decel_length = -0.5 * acceleration * t_decel * t_decel + max_velocity * t_decel;

        let mut coast_length = distance - accel_length - decel_length;
        if coast_length < 0.0 && nearly_zero(coast_length) {
            // Ramps overlapping within tolerance: no coast phase
            coast_length = 0.0;
        }
        let t_coast = if nearly_zero(max_velocity) {
            0.0
        } else {
            coast_length / max_velocity
        };

        Self {
            distance,
            max_velocity,
            acceleration,
            accel: PhaseComponent {
                duration: t_accel,
                length: accel_length,
                start_offset: 0.0,
            },
            coast: PhaseComponent {
                duration: t_coast,
                length: coast_length,
                start_offset: accel_length,
            },
            decel: PhaseComponent {
                duration: t_decel,
                length: decel_length,
                start_offset: accel_length + coast_length,
            },
        }
    }

    /// Compute the profile, lowering the peak velocity to `sqrt(distance · a)`
    /// if the requested one cannot be reached.
    ///
    /// The correction is applied at most once and yields a triangular profile.
    pub fn limited(distance: f64, max_velocity: f64, acceleration: f64) -> Self {
        let profile = Self::symmetric(distance, max_velocity, acceleration);
        if profile.needs_reduction() {
            Self::symmetric(distance, sqrt(distance * acceleration), acceleration)
        } else {
            profile
        }
    }

    /// Check if the coast length is negative beyond tolerance.
    #[inline]
    pub fn needs_reduction(&self) -> bool {
        self.coast.length < -EPSILON
    }

    /// Check if the profile has no constant-velocity phase.
    #[inline]
    pub fn is_triangular(&self) -> bool {
        nearly_zero(self.coast.duration)
    }

    /// Total duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.accel.duration + self.coast.duration + self.decel.duration
    }

    /// Phase components in section order.
    #[inline]
    pub fn components(&self) -> [PhaseComponent; 3] {
        [self.accel, self.coast, self.decel]
    }
}
