//! Constant-acceleration (trapezoidal) solver.
//!
//! Every group of a section follows a symmetric bang-coast-bang profile. The
//! group needing the most time is the reference: its limits, lowered where a
//! scaled group would exceed its own limits, define a shared profile. Every
//! group runs that profile scaled by its distance ratio, so all groups share
//! the same phase durations and arrive together.

use heapless::Vec;

use crate::error::{truncated_name, Error, PathError, Result};
use crate::group::{GroupSchema, Limits, MAX_GROUPS};
use crate::log;
use crate::numeric::{index_of_max, nearly_zero};
use crate::path::{Path, Waypoint};

use super::phase::{Phase, PhaseKind};
use super::profile::TrapezoidalProfile;
use super::result::EvaluationResult;
use super::section::{GroupMotion, Section, VelocityReduction};
use super::solver::KinematicSolver;

/// Solver producing time-synchronized trapezoidal profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConstantAccelerationSolver;

fn endpoints(path: &Path, start_index: usize) -> Result<(&Waypoint, &Waypoint)> {
    match (path.get(start_index), path.get(start_index + 1)) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => Err(PathError::NotEnoughWaypoints(path.len()).into()),
    }
}

fn mismatch(waypoint: &Waypoint, group: &str) -> Error {
    PathError::SchemaMismatch {
        waypoint: truncated_name(waypoint.name()),
        group: truncated_name(group),
    }
    .into()
}

impl KinematicSolver for ConstantAccelerationSolver {
    fn build_section(
        &self,
        schema: &GroupSchema,
        path: &Path,
        start_index: usize,
        id: usize,
    ) -> Result<Section> {
        let (start, end) = endpoints(path, start_index)?;
        start.check_schema(schema)?;
        end.check_schema(schema)?;

        let mut groups: Vec<GroupMotion, MAX_GROUPS> = Vec::new();
        let mut durations: Vec<f64, MAX_GROUPS> = Vec::new();
        let mut reductions: Vec<VelocityReduction, MAX_GROUPS> = Vec::new();

        // Unconstrained timing of every group with its own limits
        for (index, (from, to)) in start.groups().iter().zip(end.groups()).enumerate() {
            let distance = from.value.distance_to(&to.value);
            let limits = to.limits;
            let profile =
                TrapezoidalProfile::limited(distance, limits.max_velocity, limits.max_acceleration);

            if profile.max_velocity < limits.max_velocity {
                log::info!(
                    "[section {} between waypoints {} ({}) and {} ({})][{}] decreasing maximum velocity from {} to {}",
                    id,
                    start.id(),
                    start.name(),
                    end.id(),
                    end.name(),
                    schema.get(index).map(|g| g.name()).unwrap_or("?"),
                    limits.max_velocity,
                    profile.max_velocity
                );
                let _ = reductions.push(VelocityReduction {
                    group: index,
                    requested: limits.max_velocity,
                    reduced: profile.max_velocity,
                });
            }

            let _ = groups.push(GroupMotion {
                distance,
                max_velocity: profile.max_velocity,
                max_acceleration: profile.acceleration,
            });
            let _ = durations.push(profile.duration());
        }

        let slowest = index_of_max(&durations);
        let reference = groups.get(slowest).copied().unwrap_or_default();

        // Shared limits, lowered until no scaled group exceeds its own limits
        let mut shared = Limits::new(reference.max_velocity, reference.max_acceleration);
        if !nearly_zero(reference.distance) {
            for (index, (motion, to)) in groups.iter().zip(end.groups()).enumerate() {
                if nearly_zero(motion.distance) {
                    continue;
                }
                let cap = to.limits.scaled(reference.distance / motion.distance);
                if cap.max_velocity < shared.max_velocity
                    || cap.max_acceleration < shared.max_acceleration
                {
                    log::info!(
                        "[section {}][{}] stretching section to respect velocity {} and acceleration {}",
                        id,
                        schema.get(index).map(|g| g.name()).unwrap_or("?"),
                        to.limits.max_velocity,
                        to.limits.max_acceleration
                    );
                }
                shared.max_velocity = shared.max_velocity.min(cap.max_velocity);
                shared.max_acceleration = shared.max_acceleration.min(cap.max_acceleration);
            }
        }
        let shared_profile = TrapezoidalProfile::limited(
            reference.distance,
            shared.max_velocity,
            shared.max_acceleration,
        );

        // Scale the shared limits down to every group's distance
        let mut phases = PhaseKind::ALL.map(Phase::new);
        for motion in groups.iter_mut() {
            let lambda = if nearly_zero(reference.distance) {
                0.0
            } else {
                motion.distance / reference.distance
            };
            let limits = Limits::new(shared_profile.max_velocity, shared_profile.acceleration)
                .scaled(lambda);
            motion.max_velocity = limits.max_velocity;
            motion.max_acceleration = limits.max_acceleration;

            let profile = TrapezoidalProfile::symmetric(
                motion.distance,
                motion.max_velocity,
                motion.max_acceleration,
            );
            for (phase, component) in phases.iter_mut().zip(profile.components()) {
                let _ = phase.components.push(component);
            }
        }

        let mut t_start = 0.0;
        let mut distance = 0.0;
        for phase in phases.iter_mut() {
            phase.settle();
            phase.t_start = t_start;
            phase.distance_from_section_start = distance;
            t_start += phase.duration;
            distance += phase.length;
        }

        // A slowest group at rest leaves every phase empty.
        let duration = if nearly_zero(reference.distance) {
            0.0
        } else {
            shared_profile.duration()
        };

        log::debug!(
            "section {}: waypoints {} -> {}, duration {} s, slowest group {}",
            id,
            start.id(),
            end.id(),
            duration,
            slowest
        );

        Ok(Section::new(id, start_index, phases, groups, slowest, duration).with_reductions(reductions))
    }

    fn evaluate(
        &self,
        schema: &GroupSchema,
        path: &Path,
        section: &Section,
        t_section: f64,
        result: &mut EvaluationResult,
    ) -> Result<()> {
        let (start, end) = endpoints(path, section.start_index())?;
        if result.len() != schema.len() {
            return Err(mismatch(start, ""));
        }

        let phase = section.phase_at(t_section)?;
        let t_phase = t_section - phase.t_start;

        for (index, state) in result.states_mut().iter_mut().enumerate() {
            let (Some(from), Some(to), Some(motion), Some(component)) = (
                start.group(index),
                end.group(index),
                section.group(index),
                phase.component(index),
            ) else {
                return Err(mismatch(start, schema.get(index).map(|g| g.name()).unwrap_or("")));
            };

            let (travelled, speed) = phase.kind.kinematics(
                t_phase,
                motion.max_acceleration,
                motion.max_velocity,
                component.start_offset,
            );
            let fraction = if nearly_zero(motion.distance) {
                0.0
            } else {
                travelled / motion.distance
            };

            state.location = from.value.interpolate(&to.value, fraction);
            state.velocity = from.value.direction_to(&to.value);
            for v in state.velocity.iter_mut() {
                *v *= speed;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupValue;
    use core::f64::consts::FRAC_PI_2;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn linear_schema() -> GroupSchema {
        GroupSchema::new().with_linear("pos", &["x"]).unwrap()
    }

    fn linear_path(schema: &GroupSchema, from: f64, to: f64, limits: Limits) -> Path {
        let a = Waypoint::builder(schema, "a")
            .linear("pos", &[from], limits)
            .build()
            .unwrap();
        let b = Waypoint::builder(schema, "b")
            .linear("pos", &[to], limits)
            .build()
            .unwrap();
        Path::new().with_point(a).unwrap().with_point(b).unwrap()
    }

    fn two_group_schema() -> GroupSchema {
        GroupSchema::new()
            .with_linear("a", &["x"])
            .unwrap()
            .with_linear("b", &["x"])
            .unwrap()
    }

    fn two_group_path(schema: &GroupSchema) -> Path {
        // a alone: 4 units at v = 2, a = 1 -> 4 s; b alone: 1 unit at v = 1, a = 1 -> 2 s
        let p0 = Waypoint::builder(schema, "p0")
            .linear("a", &[0.0], Limits::new(2.0, 1.0))
            .linear("b", &[0.0], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        let p1 = Waypoint::builder(schema, "p1")
            .linear("a", &[4.0], Limits::new(2.0, 1.0))
            .linear("b", &[1.0], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        Path::new().with_point(p0).unwrap().with_point(p1).unwrap()
    }

    fn evaluate(schema: &GroupSchema, path: &Path, section: &Section, t: f64) -> EvaluationResult {
        let mut result = EvaluationResult::new(schema);
        ConstantAccelerationSolver
            .evaluate(schema, path, section, t, &mut result)
            .unwrap();
        result
    }

    fn pos(result: &EvaluationResult, group: &str) -> f64 {
        result.location(group).unwrap().as_linear().unwrap()[0]
    }

    #[test]
    fn test_unit_move_is_triangular() {
        let schema = linear_schema();
        let path = linear_path(&schema, 0.0, 1.0, Limits::new(1.0, 1.0));
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        assert!(approx(section.duration(), 2.0));
        let acc = section.phase(PhaseKind::Acceleration);
        let coast = section.phase(PhaseKind::ConstantVelocity);
        let dec = section.phase(PhaseKind::Deceleration);
        assert!(approx(acc.duration, 1.0));
        assert!(approx(acc.length, 0.5));
        assert!(approx(coast.duration, 0.0));
        assert!(approx(dec.duration, 1.0));
        assert!(approx(dec.length, 0.5));
        assert!(approx(dec.t_start, 1.0));
        assert!(section.velocity_reductions().is_empty());

        let apex = evaluate(&schema, &path, &section, 1.0);
        assert!(approx(pos(&apex, "pos"), 0.5));
        assert!(approx(apex.velocity("pos").unwrap()[0], 1.0));
    }

    #[test]
    fn test_excess_velocity_matches_reachable_velocity() {
        let schema = linear_schema();
        let slow = linear_path(&schema, 0.0, 1.0, Limits::new(1.0, 1.0));
        let fast = linear_path(&schema, 0.0, 1.0, Limits::new(5.0, 1.0));

        let expected = ConstantAccelerationSolver.build_section(&schema, &slow, 0, 0).unwrap();
        let section = ConstantAccelerationSolver.build_section(&schema, &fast, 0, 0).unwrap();

        assert_eq!(section.phases(), expected.phases());
        assert!(approx(section.group(0).unwrap().max_velocity, 1.0));

        let reductions = section.velocity_reductions();
        assert_eq!(reductions.len(), 1);
        assert_eq!(reductions[0].group, 0);
        assert!(approx(reductions[0].requested, 5.0));
        assert!(approx(reductions[0].reduced, 1.0));
    }

    #[test]
    fn test_groups_are_synchronized() {
        let schema = two_group_schema();
        let path = two_group_path(&schema);
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        assert_eq!(section.slowest_group(), 0);
        assert!(approx(section.duration(), 4.0));

        // b is scaled with lambda = 1/4 of a's limits
        let b = section.group(1).unwrap();
        assert!(approx(b.max_velocity, 0.5));
        assert!(approx(b.max_acceleration, 0.25));

        for phase in section.phases() {
            let a = phase.component(0).unwrap();
            let b = phase.component(1).unwrap();
            assert!(approx(a.duration, b.duration));
        }

        let end = evaluate(&schema, &path, &section, 4.0);
        assert!(approx(pos(&end, "a"), 4.0));
        assert!(approx(pos(&end, "b"), 1.0));
        assert!(end.velocity("a").unwrap()[0].abs() < 1e-9);
        assert!(end.velocity("b").unwrap()[0].abs() < 1e-9);

        let mid = evaluate(&schema, &path, &section, 2.0);
        assert!(approx(pos(&mid, "a") / 4.0, pos(&mid, "b")));
    }

    #[test]
    fn test_scaled_group_stays_within_own_limits() {
        let schema = two_group_schema();
        // b alone: 1 unit at v = 0.3, a = 100 -> ~3.34 s, faster than a's 4 s,
        // but a's limits scaled by 1/4 would drive b at 0.5
        let p0 = Waypoint::builder(&schema, "p0")
            .linear("a", &[0.0], Limits::new(2.0, 1.0))
            .linear("b", &[0.0], Limits::new(0.3, 100.0))
            .build()
            .unwrap();
        let p1 = Waypoint::builder(&schema, "p1")
            .linear("a", &[4.0], Limits::new(2.0, 1.0))
            .linear("b", &[1.0], Limits::new(0.3, 100.0))
            .build()
            .unwrap();
        let path = Path::new().with_point(p0).unwrap().with_point(p1).unwrap();
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        assert_eq!(section.slowest_group(), 0);
        let b = section.group(1).unwrap();
        assert!(approx(b.max_velocity, 0.3));
        assert!(b.max_acceleration <= 100.0);

        // Shared profile: 4 units at v = 1.2, a = 1
        assert!(approx(section.duration(), 1.2 + 4.0 / 1.2));
        assert!(approx(section.group(0).unwrap().max_velocity, 1.2));

        for i in 0..=45 {
            let t = (i as f64 * 0.1).min(section.duration());
            let result = evaluate(&schema, &path, &section, t);
            assert!(result.velocity("b").unwrap()[0] <= 0.3 + 1e-9, "t = {}", t);
            assert!(result.velocity("a").unwrap()[0] <= 2.0 + 1e-9, "t = {}", t);
            assert!(approx(pos(&result, "a") / 4.0, pos(&result, "b")));
        }

        let end = evaluate(&schema, &path, &section, section.duration());
        assert!(approx(pos(&end, "a"), 4.0));
        assert!(approx(pos(&end, "b"), 1.0));
    }

    #[test]
    fn test_resting_group_is_degenerate() {
        let schema = two_group_schema();
        let p0 = Waypoint::builder(&schema, "p0")
            .linear("a", &[0.0], Limits::new(1.0, 1.0))
            .linear("b", &[3.0], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        let p1 = Waypoint::builder(&schema, "p1")
            .linear("a", &[10.0], Limits::new(1.0, 1.0))
            .linear("b", &[3.0], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        let path = Path::new().with_point(p0).unwrap().with_point(p1).unwrap();
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        assert!(approx(section.duration(), 11.0));
        for phase in section.phases() {
            assert_eq!(phase.component(1).unwrap().duration, 0.0);
        }

        let mid = evaluate(&schema, &path, &section, 5.0);
        assert!(approx(pos(&mid, "b"), 3.0));
        assert_eq!(mid.velocity("b").unwrap(), &[0.0]);
    }

    #[test]
    fn test_identical_waypoints() {
        let schema = linear_schema();
        let path = linear_path(&schema, 2.0, 2.0, Limits::new(1.0, 1.0));
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        assert_eq!(section.duration(), 0.0);
        let result = evaluate(&schema, &path, &section, 0.0);
        assert!(approx(pos(&result, "pos"), 2.0));
    }

    #[test]
    fn test_phase_durations_sum_to_section_duration() {
        let schema = linear_schema();
        let path = linear_path(&schema, -3.0, 7.0, Limits::new(2.0, 1.5));
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        let sum: f64 = section.phases().iter().map(|p| p.duration).sum();
        assert!(approx(sum, section.duration()));
        assert!(approx(
            section.phase(PhaseKind::ConstantVelocity).distance_from_section_start,
            section.phase(PhaseKind::Acceleration).length
        ));
    }

    #[test]
    fn test_rotation_group() {
        let schema = GroupSchema::new().with_rotational("rot").unwrap();
        let half = FRAC_PI_2 / 2.0;
        let p0 = Waypoint::builder(&schema, "p0")
            .rotation("rot", [1.0, 0.0, 0.0, 0.0], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        let p1 = Waypoint::builder(&schema, "p1")
            .rotation("rot", [libm::cos(half), 0.0, 0.0, libm::sin(half)], Limits::new(1.0, 1.0))
            .build()
            .unwrap();
        let path = Path::new().with_point(p0).unwrap().with_point(p1).unwrap();
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();

        // pi/2 rad at v = a = 1: 1 s ramps, pi/2 - 1 rad of coast
        assert!(approx(section.duration(), FRAC_PI_2 + 1.0));

        let coast = evaluate(&schema, &path, &section, 1.2);
        let velocity = coast.velocity("rot").unwrap();
        assert!(approx(velocity[0], 0.0));
        assert!(approx(velocity[1], 0.0));
        assert!(approx(velocity[2], 1.0));

        let end = evaluate(&schema, &path, &section, section.duration());
        let target = path.get(1).unwrap().group(0).unwrap().value.clone();
        assert!(end.location("rot").unwrap().distance_to(&target) < 1e-6);

        let start = evaluate(&schema, &path, &section, 0.0);
        let origin = GroupValue::rotation(1.0, 0.0, 0.0, 0.0).unwrap();
        assert!(start.location("rot").unwrap().distance_to(&origin) < 1e-6);
    }

    #[test]
    fn test_out_of_section_time() {
        let schema = linear_schema();
        let path = linear_path(&schema, 0.0, 1.0, Limits::new(1.0, 1.0));
        let section = ConstantAccelerationSolver.build_section(&schema, &path, 0, 0).unwrap();
        let mut result = EvaluationResult::new(&schema);

        assert!(ConstantAccelerationSolver
            .evaluate(&schema, &path, &section, 3.0, &mut result)
            .is_err());
    }

    #[test]
    fn test_missing_end_waypoint() {
        let schema = linear_schema();
        let path = linear_path(&schema, 0.0, 1.0, Limits::new(1.0, 1.0));
        assert!(matches!(
            ConstantAccelerationSolver.build_section(&schema, &path, 1, 1),
            Err(Error::Path(PathError::NotEnoughWaypoints(2)))
        ));
    }
}
