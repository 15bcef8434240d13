//! # sync-motion
//!
//! Time-synchronized trapezoidal trajectories for several independent groups
//! of degrees of freedom moving through a shared list of waypoints.
//!
//! ## Features
//!
//! - **Multi-group synchronization**: all groups of a section start and stop together
//! - **Trapezoidal profiles**: bang-coast-bang timing with automatic triangular correction
//! - **Rotational groups**: unit quaternions interpolated along the geodesic
//! - **Configuration-driven**: define groups and waypoints in TOML files
//! - **no_std compatible**: core library works without standard library or allocator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use sync_motion::{load_config, Trajectory};
//!
//! // Load groups and waypoints from TOML
//! let config = sync_motion::load_config("pick_and_place.toml")?;
//! let trajectory = Trajectory::from_config(&config)?;
//!
//! // Sample the trajectory at 100 Hz
//! let mut result = trajectory.new_result();
//! let mut t = 0.0;
//! while t <= trajectory.duration() {
//!     trajectory.evaluate(t, &mut result)?;
//!     t += 0.01;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `tracing` logging
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

// Core modules
pub mod config;
pub mod error;
pub mod group;
mod log;
pub mod motion;
pub mod numeric;
pub mod path;
pub mod trajectory;

// Re-exports for ergonomic API
pub use config::{validate_config, SystemConfig};
pub use error::{ConfigError, Error, PathError, QueryError, Result};
pub use group::{GroupDef, GroupSchema, GroupValue, Limits};
pub use motion::{
    ConstantAccelerationSolver, EvaluationResult, KinematicSolver, PhaseKind, Section, Solver,
};
pub use path::{Path, Waypoint};
pub use trajectory::{PathManager, Trajectory};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
