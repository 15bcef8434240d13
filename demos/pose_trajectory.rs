//! Example: Synchronized position and orientation trajectory.
//!
//! This example demonstrates how to:
//! - Define a schema with a linear and a rotational group
//! - Build waypoints with per-group limits
//! - Sample position and velocity of every group over time
//!
//! Run with: `cargo run --example pose_trajectory`

use sync_motion::{
    error::Result, GroupSchema, GroupValue, Limits, Path, Trajectory, Waypoint,
};

fn main() -> Result<()> {
    println!("=== Pose Trajectory Example ===\n");

    let schema = GroupSchema::new()
        .with_linear("pos", &["x", "y", "z"])?
        .with_rotational("rot")?;

    let translation = Limits::new(0.5, 1.0);
    let rotation = Limits::new(1.0, 2.0);

    // Quarter turn about z
    let half_angle = core::f64::consts::FRAC_PI_4;
    let turned = [half_angle.cos(), 0.0, 0.0, half_angle.sin()];

    let p1 = Waypoint::builder(&schema, "p1")
        .linear("pos", &[0.0, 0.0, 0.0], translation)
        .rotation("rot", [1.0, 0.0, 0.0, 0.0], rotation)
        .build()?;
    let p2 = Waypoint::builder(&schema, "p2")
        .linear("pos", &[1.0, 0.5, 0.2], translation)
        .rotation("rot", turned, rotation)
        .build()?;

    // p1 -> p2 -> p1
    let path = Path::new()
        .with_point(p1.clone())?
        .with_point(p2)?
        .with_point(p1)?;

    let mut trajectory = Trajectory::new(schema);
    trajectory.reset_path(path)?;

    println!("Sections:");
    for section in trajectory.manager().sections() {
        println!(
            "  #{}: waypoints {} -> {}, start {:.3} s, duration {:.3} s, slowest group {}",
            section.id(),
            section.start_index() + 1,
            section.end_index() + 1,
            section.start_time(),
            section.duration(),
            section.slowest_group()
        );
        for phase in section.phases() {
            println!(
                "      {:<16} t_start {:.3} s, duration {:.3} s",
                phase.kind.name(),
                phase.t_start,
                phase.duration
            );
        }
    }
    println!("Total duration: {:.3} s\n", trajectory.duration());

    let mut result = trajectory.new_result();
    let samples = 100;
    println!("{:>7} {:>4} {:>24} {:>24} {:>8}", "t", "wp", "position", "velocity", "angle");
    for i in 0..=samples {
        let t = trajectory.duration() * i as f64 / samples as f64;
        trajectory.evaluate(t, &mut result)?;

        let pos = result.location("pos").and_then(GroupValue::as_linear).unwrap_or(&[]);
        let vel = result.velocity("pos").unwrap_or(&[]);
        let angle = result
            .location("rot")
            .and_then(GroupValue::as_rotation)
            .map(|q| q.angle())
            .unwrap_or(0.0);

        println!(
            "{:>7.3} {:>4} {:>24} {:>24} {:>8.4}",
            t,
            trajectory.num_passed_waypoints(t)?,
            format!("{:.3?}", pos),
            format!("{:.3?}", vel),
            angle
        );
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
