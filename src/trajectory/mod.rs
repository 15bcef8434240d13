//! Trajectory module for sync-motion.
//!
//! Provides the path manager holding timed sections and the `Trajectory`
//! query façade.

mod generator;
mod manager;

pub use generator::Trajectory;
pub use manager::{PathManager, MAX_SECTIONS};
