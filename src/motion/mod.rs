//! Motion module for sync-motion.
//!
//! Provides per-group trapezoidal profiles, synchronized sections, and the
//! solvers that build and evaluate them.

mod constant_acceleration;
mod phase;
mod profile;
mod result;
mod section;
mod solver;

pub use constant_acceleration::ConstantAccelerationSolver;
pub use phase::{Phase, PhaseComponent, PhaseKind};
pub use profile::TrapezoidalProfile;
pub use result::{EvaluationResult, GroupState};
pub use section::{GroupMotion, Section, VelocityReduction};
pub use solver::{KinematicSolver, Solver};
