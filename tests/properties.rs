//! Property tests for section timing and synchronization.

use proptest::prelude::*;

use sync_motion::motion::TrapezoidalProfile;
use sync_motion::{GroupSchema, Limits, Path, Trajectory, Waypoint};

const EPS: f64 = 1e-6;

fn limits() -> impl Strategy<Value = Limits> {
    (0.1f64..5.0, 0.1f64..5.0).prop_map(|(v, a)| Limits::new(v, a))
}

/// Two linear groups (`a` with two components, `b` with one) moving between two waypoints.
fn two_group_trajectory(
    from: ([f64; 2], f64),
    to: ([f64; 2], f64),
    la: Limits,
    lb: Limits,
) -> Trajectory {
    let schema = GroupSchema::new()
        .with_linear("a", &["x", "y"])
        .unwrap()
        .with_linear("b", &["x"])
        .unwrap();
    let start = Waypoint::builder(&schema, "start")
        .linear("a", &from.0, la)
        .linear("b", &[from.1], lb)
        .build()
        .unwrap();
    let end = Waypoint::builder(&schema, "end")
        .linear("a", &to.0, la)
        .linear("b", &[to.1], lb)
        .build()
        .unwrap();
    let path = Path::new().with_point(start).unwrap().with_point(end).unwrap();

    let mut trajectory = Trajectory::new(schema);
    trajectory.reset_path(path).unwrap();
    trajectory
}

fn point() -> impl Strategy<Value = ([f64; 2], f64)> {
    (-10.0f64..10.0, -10.0f64..10.0, -10.0f64..10.0).prop_map(|(x, y, z)| ([x, y], z))
}

proptest! {
    #[test]
    fn phase_durations_sum_to_section_duration(
        from in point(), to in point(), la in limits(), lb in limits()
    ) {
        let trajectory = two_group_trajectory(from, to, la, lb);
        let section = &trajectory.manager().sections()[0];
        let sum: f64 = section.phases().iter().map(|p| p.duration).sum();
        prop_assert!((sum - section.duration()).abs() < EPS);
    }

    #[test]
    fn groups_share_phase_durations(
        from in point(), to in point(), la in limits(), lb in limits()
    ) {
        let trajectory = two_group_trajectory(from, to, la, lb);
        let section = &trajectory.manager().sections()[0];
        for phase in section.phases() {
            for component in phase.components.iter() {
                if component.duration.abs() > EPS {
                    prop_assert!((component.duration - phase.duration).abs() < EPS);
                }
            }
        }
    }

    #[test]
    fn groups_start_and_stop_at_rest(
        from in point(), to in point(), la in limits(), lb in limits()
    ) {
        let trajectory = two_group_trajectory(from, to, la, lb);
        let mut result = trajectory.new_result();

        trajectory.evaluate(0.0, &mut result).unwrap();
        for state in result.states() {
            prop_assert!(state.velocity.iter().all(|v| v.abs() < EPS));
        }

        trajectory.evaluate(trajectory.duration(), &mut result).unwrap();
        for state in result.states() {
            prop_assert!(state.velocity.iter().all(|v| v.abs() < 1e-4));
        }
        let a = result.location("a").unwrap().as_linear().unwrap();
        prop_assert!((a[0] - to.0[0]).abs() < 1e-4);
        prop_assert!((a[1] - to.0[1]).abs() < 1e-4);
        let b = result.location("b").unwrap().as_linear().unwrap();
        prop_assert!((b[0] - to.1).abs() < 1e-4);
    }

    #[test]
    fn groups_stay_within_own_limits(
        from in point(), to in point(), la in limits(), lb in limits(), fraction in 0.0f64..=1.0
    ) {
        let trajectory = two_group_trajectory(from, to, la, lb);
        let section = &trajectory.manager().sections()[0];
        for (index, own) in [la, lb].iter().enumerate() {
            let motion = section.group(index).unwrap();
            prop_assert!(motion.max_velocity <= own.max_velocity * (1.0 + 1e-9) + 1e-12);
            prop_assert!(motion.max_acceleration <= own.max_acceleration * (1.0 + 1e-9) + 1e-12);
        }

        let mut result = trajectory.new_result();
        trajectory.evaluate(fraction * trajectory.duration(), &mut result).unwrap();
        for (name, own) in [("a", la), ("b", lb)] {
            let speed = result
                .velocity(name)
                .unwrap()
                .iter()
                .map(|v| v * v)
                .sum::<f64>()
                .sqrt();
            prop_assert!(speed <= own.max_velocity + EPS);
        }
    }

    #[test]
    fn every_time_maps_to_a_section(
        from in point(), to in point(), la in limits(), lb in limits(), fraction in 0.0f64..=1.0
    ) {
        let trajectory = two_group_trajectory(from, to, la, lb);
        let mut result = trajectory.new_result();
        let t = fraction * trajectory.duration();
        prop_assert!(trajectory.evaluate(t, &mut result).is_ok());
        prop_assert_eq!(trajectory.num_passed_waypoints(t).unwrap(), 1);
    }

    #[test]
    fn triangular_correction_shortens_profile(
        distance in 0.01f64..10.0, a_max in 0.1f64..5.0, excess in 1.01f64..4.0
    ) {
        // A peak velocity above sqrt(d * a) cannot be reached
        let v_max = excess * (distance * a_max).sqrt();
        let naive = TrapezoidalProfile::symmetric(distance, v_max, a_max);
        let corrected = TrapezoidalProfile::limited(distance, v_max, a_max);

        prop_assert!(naive.needs_reduction());
        prop_assert!(corrected.coast.duration.abs() < EPS);
        prop_assert!(corrected.duration() < naive.duration());
        prop_assert!(
            (corrected.components().iter().map(|c| c.length).sum::<f64>() - distance).abs() < EPS
        );
    }
}
