//! Kinematic solver contract and the set of shipped solvers.

use serde::Deserialize;

use crate::error::Result;
use crate::group::GroupSchema;
use crate::path::Path;

use super::constant_acceleration::ConstantAccelerationSolver;
use super::result::EvaluationResult;
use super::section::Section;

/// Profile algorithm used to build and evaluate sections.
///
/// Implementations must be deterministic: the path manager calls
/// `build_section` once per adjacent waypoint pair when a path is reset, and
/// `evaluate` on every query.
pub trait KinematicSolver {
    /// Build the section between waypoint `start_index` and `start_index + 1` of `path`.
    ///
    /// The returned section has a start time of zero; the caller places it.
    fn build_section(
        &self,
        schema: &GroupSchema,
        path: &Path,
        start_index: usize,
        id: usize,
    ) -> Result<Section>;

    /// Write location and velocity of every group at `t_section` seconds into
    /// `section` to `result`.
    fn evaluate(
        &self,
        schema: &GroupSchema,
        path: &Path,
        section: &Section,
        t_section: f64,
        result: &mut EvaluationResult,
    ) -> Result<()>;
}

/// Solver selection, usable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Solver {
    /// Trapezoidal (bang-coast-bang) profiles.
    #[default]
    ConstantAcceleration,
}

impl Solver {
    /// Name for display/debugging.
    pub fn name(self) -> &'static str {
        match self {
            Solver::ConstantAcceleration => "constant_acceleration",
        }
    }
}

impl KinematicSolver for Solver {
    fn build_section(
        &self,
        schema: &GroupSchema,
        path: &Path,
        start_index: usize,
        id: usize,
    ) -> Result<Section> {
        match self {
            Solver::ConstantAcceleration => {
                ConstantAccelerationSolver.build_section(schema, path, start_index, id)
            }
        }
    }

    fn evaluate(
        &self,
        schema: &GroupSchema,
        path: &Path,
        section: &Section,
        t_section: f64,
        result: &mut EvaluationResult,
    ) -> Result<()> {
        match self {
            Solver::ConstantAcceleration => {
                ConstantAccelerationSolver.evaluate(schema, path, section, t_section, result)
            }
        }
    }
}
