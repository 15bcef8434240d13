//! Trajectory façade: path reset and time queries.

use crate::config::SystemConfig;
use crate::error::{PathError, Result};
use crate::group::GroupSchema;
use crate::motion::{EvaluationResult, KinematicSolver, Solver};
use crate::path::Path;

use super::manager::PathManager;

/// Time-parameterized multi-group trajectory through a path.
///
/// # Example
///
/// ```rust
/// use sync_motion::{GroupSchema, Limits, Path, Trajectory, Waypoint};
///
/// let schema = GroupSchema::new().with_linear("pos", &["x"])?;
/// let limits = Limits::new(1.0, 1.0);
/// let path = Path::new()
///     .with_point(Waypoint::builder(&schema, "start").linear("pos", &[0.0], limits).build()?)?
///     .with_point(Waypoint::builder(&schema, "end").linear("pos", &[1.0], limits).build()?)?;
///
/// let mut trajectory = Trajectory::new(schema);
/// trajectory.reset_path(path)?;
/// assert!((trajectory.duration() - 2.0).abs() < 1e-9);
///
/// let mut result = trajectory.new_result();
/// trajectory.evaluate(1.0, &mut result)?;
/// assert!((result.velocity("pos").unwrap()[0] - 1.0).abs() < 1e-9);
/// # Ok::<(), sync_motion::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Trajectory<S: KinematicSolver = Solver> {
    manager: PathManager<S>,
}

impl Trajectory<Solver> {
    /// Create an empty trajectory using the default solver.
    pub fn new(schema: GroupSchema) -> Self {
        Self::with_solver(schema, Solver::default())
    }

    /// Create a trajectory from a validated configuration, with its path set.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema or the waypoints are invalid.
    pub fn from_config(config: &SystemConfig) -> Result<Self> {
        let schema = config.schema()?;
        let path = config.path(&schema)?;
        let mut trajectory = Self::with_solver(schema, config.solver);
        trajectory.reset_path(path)?;
        Ok(trajectory)
    }
}

impl<S: KinematicSolver> Trajectory<S> {
    /// Create an empty trajectory with a specific solver.
    pub fn with_solver(schema: GroupSchema, solver: S) -> Self {
        Self {
            manager: PathManager::new(schema, solver),
        }
    }

    /// Replace the path and rebuild all sections.
    ///
    /// # Errors
    ///
    /// See [`PathManager::reset_path`].
    pub fn reset_path(&mut self, path: Path) -> Result<()> {
        self.manager.reset_path(path)
    }

    /// Total duration in seconds.
    #[inline]
    pub fn duration(&self) -> f64 {
        self.manager.duration()
    }

    /// Id of the start waypoint of the section active at `time`.
    ///
    /// Since ids are 1-based this is the number of waypoints already passed.
    pub fn num_passed_waypoints(&self, time: f64) -> Result<usize> {
        let section = self.manager.section_at_time(time)?;
        self.manager
            .path()
            .get(section.start_index())
            .map(|w| w.id())
            .ok_or_else(|| PathError::NotEnoughWaypoints(self.manager.path().len()).into())
    }

    /// Write location and velocity of every group at absolute `time` to `result`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::TimeOutOfRange` if `time` lies outside `[0, duration]`.
    pub fn evaluate(&self, time: f64, result: &mut EvaluationResult) -> Result<()> {
        let section = self.manager.section_at_time(time)?;
        let t_section = time - section.start_time();
        self.manager.solver().evaluate(
            self.manager.schema(),
            self.manager.path(),
            section,
            t_section,
            result,
        )
    }

    /// Create a result buffer laid out for this trajectory's schema.
    pub fn new_result(&self) -> EvaluationResult {
        EvaluationResult::new(self.manager.schema())
    }

    /// Group schema.
    #[inline]
    pub fn schema(&self) -> &GroupSchema {
        self.manager.schema()
    }

    /// Underlying path manager, for section inspection.
    #[inline]
    pub fn manager(&self) -> &PathManager<S> {
        &self.manager
    }
}
