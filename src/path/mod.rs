//! Path module for sync-motion.
//!
//! Provides waypoints, the waypoint builder and the ordered waypoint list.

mod builder;
mod sequence;
mod waypoint;

pub use builder::WaypointBuilder;
pub use sequence::{Path, MAX_WAYPOINTS};
pub use waypoint::{GroupPoint, Waypoint};
