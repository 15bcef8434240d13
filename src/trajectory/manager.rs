//! Path manager: owns the path and its timed sections.

use heapless::Vec;

use crate::error::{PathError, QueryError, Result};
use crate::group::GroupSchema;
use crate::log;
use crate::motion::{KinematicSolver, Section, Solver};
use crate::numeric::{nearly_equal, nearly_zero};
use crate::path::{Path, MAX_WAYPOINTS};

/// Maximum number of sections (one per adjacent waypoint pair).
pub const MAX_SECTIONS: usize = MAX_WAYPOINTS - 1;

/// Owns a path and the sections built from it.
///
/// The manager is either empty or populated; [`reset_path`](Self::reset_path)
/// is the only transition and leaves the previous state untouched on error.
#[derive(Debug, Clone)]
pub struct PathManager<S: KinematicSolver = Solver> {
    schema: GroupSchema,
    solver: S,
    path: Path,
    sections: Vec<Section, MAX_SECTIONS>,
}

impl<S: KinematicSolver> PathManager<S> {
    /// Create an empty manager for a schema.
    pub fn new(schema: GroupSchema, solver: S) -> Self {
        Self {
            schema,
            solver,
            path: Path::new(),
            sections: Vec::new(),
        }
    }

    /// Replace the path and rebuild all sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the path has fewer than two waypoints or a waypoint
    /// does not match the schema. The previous path and sections are kept.
    pub fn reset_path(&mut self, path: Path) -> Result<()> {
        path.validate(&self.schema)?;

        let mut sections: Vec<Section, MAX_SECTIONS> = Vec::new();
        let mut start_time = 0.0;
        for index in 0..path.len() - 1 {
            let mut section = self.solver.build_section(&self.schema, &path, index, index)?;
            section.set_start_time(start_time);
            start_time += section.duration();
            sections
                .push(section)
                .map_err(|_| PathError::TooManyWaypoints)?;
        }

        log::debug!(
            "path reset: {} waypoints, {} sections, duration {} s",
            path.len(),
            sections.len(),
            start_time
        );

        self.path = path;
        self.sections = sections;
        Ok(())
    }

    /// Check if no path has been set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Sections in path order.
    #[inline]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Current path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Group schema shared by all waypoints.
    #[inline]
    pub fn schema(&self) -> &GroupSchema {
        &self.schema
    }

    /// Solver used to build and evaluate sections.
    #[inline]
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Total duration in seconds (zero when empty).
    pub fn duration(&self) -> f64 {
        self.sections.last().map(|s| s.end_time()).unwrap_or(0.0)
    }

    /// Find the section active at absolute time `time`.
    ///
    /// A time on a boundary belongs to the earlier section, except `0` which
    /// belongs to the first one.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::TimeOutOfRange` for negative times, times past the
    /// end, or an empty manager.
    pub fn section_at_time(&self, time: f64) -> Result<&Section> {
        let mut last_end = 0.0;
        for section in self.sections.iter() {
            let end = section.end_time();
            if time > last_end && (time < end || nearly_equal(time, end)) {
                return Ok(section);
            }
            last_end = end;
        }

        if nearly_zero(time) {
            if let Some(first) = self.sections.first() {
                return Ok(first);
            }
        }

        Err(QueryError::TimeOutOfRange {
            time,
            duration: self.duration(),
        }
        .into())
    }
}
