//! Group module for sync-motion.
//!
//! Provides the group schema, per-group values and per-waypoint kinematic limits.

mod limits;
mod schema;
mod value;

pub use limits::Limits;
pub use schema::{GroupDef, GroupSchema, Label, Name, MAX_COMPONENTS, MAX_GROUPS};
pub use value::{Components, GroupValue};

pub(crate) use value::all_finite;
