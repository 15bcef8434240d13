//! Configuration module for sync-motion.
//!
//! Provides types for loading and validating group schemas and waypoint lists
//! from TOML files (with `std` feature) or pre-parsed data.

mod group;
#[cfg(feature = "std")]
mod loader;
mod system;
mod validation;
mod waypoint;

pub use group::GroupConfig;
pub use system::SystemConfig;
pub use validation::validate_config;
pub use waypoint::{GroupPointConfig, WaypointConfig};

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
