//! Error types for sync-motion.
//!
//! Provides unified error handling across configuration, path construction and
//! trajectory queries.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all sync-motion operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Waypoint or path construction error
    Path(PathError),
    /// Time query error
    Query(QueryError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Group defined twice in a schema
    DuplicateGroup(heapless::String<32>),
    /// Group name not part of the schema
    UnknownGroup(heapless::String<32>),
    /// Group has an unusable number of components
    InvalidComponentCount {
        /// Group name
        group: heapless::String<32>,
        /// Number of components found
        count: usize,
    },
    /// Invalid max velocity (must be finite and > 0)
    InvalidMaxVelocity(f64),
    /// Invalid max acceleration (must be finite and > 0)
    InvalidMaxAcceleration(f64),
    /// Schema exceeds the group capacity
    TooManyGroups,
    /// Quaternion with zero norm given for a rotational group
    InvalidOrientation(heapless::String<32>),
    /// A component value is NaN or infinite
    NonFiniteValue(heapless::String<32>),
    /// Two waypoints share the same name
    DuplicateWaypointName(heapless::String<32>),
    /// Name or label does not fit its fixed-capacity storage
    NameTooLong,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Waypoint and path construction errors.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// No waypoint with this name exists in the path
    WaypointNotFound(heapless::String<32>),
    /// Waypoint does not match the trajectory's group schema
    SchemaMismatch {
        /// Waypoint name
        waypoint: heapless::String<32>,
        /// Offending group (empty if the group count differs)
        group: heapless::String<32>,
    },
    /// Too many waypoints
    TooManyWaypoints,
    /// A path needs at least two waypoints to form a section
    NotEnoughWaypoints(usize),
}

/// Trajectory query errors.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryError {
    /// Requested time does not map to any section
    TimeOutOfRange {
        /// Requested time in seconds
        time: f64,
        /// Total trajectory duration in seconds
        duration: f64,
    },
    /// Requested in-section time does not map to any phase
    PhaseNotFound {
        /// Requested in-section time in seconds
        time: f64,
        /// Section duration in seconds
        duration: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Path(e) => write!(f, "Path error: {}", e),
            Error::Query(e) => write!(f, "Query error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::DuplicateGroup(name) => write!(f, "Duplicate group name: '{}'", name),
            ConfigError::UnknownGroup(name) => write!(f, "Group '{}' not found in schema", name),
            ConfigError::InvalidComponentCount { group, count } => {
                write!(f, "Group '{}' has an invalid component count: {}", group, count)
            }
            ConfigError::InvalidMaxVelocity(v) => write!(f, "Invalid max velocity: {}. Must be > 0", v),
            ConfigError::InvalidMaxAcceleration(v) => {
                write!(f, "Invalid max acceleration: {}. Must be > 0", v)
            }
            ConfigError::TooManyGroups => write!(f, "Too many groups (max 8)"),
            ConfigError::InvalidOrientation(name) => {
                write!(f, "Group '{}' has a zero-norm quaternion", name)
            }
            ConfigError::NonFiniteValue(name) => {
                write!(f, "Group '{}' has a non-finite component", name)
            }
            ConfigError::DuplicateWaypointName(name) => {
                write!(f, "Duplicate waypoint name: '{}'", name)
            }
            ConfigError::NameTooLong => write!(f, "Name or label exceeds its maximum length"),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathError::WaypointNotFound(name) => write!(f, "No waypoint named '{}' was found", name),
            PathError::SchemaMismatch { waypoint, group } => {
                if group.is_empty() {
                    write!(f, "Waypoint '{}' does not match the group schema", waypoint)
                } else {
                    write!(f, "Waypoint '{}' does not match the schema of group '{}'", waypoint, group)
                }
            }
            PathError::TooManyWaypoints => write!(f, "Too many waypoints (max 32)"),
            PathError::NotEnoughWaypoints(n) => {
                write!(f, "Path has {} waypoint(s), at least 2 are required", n)
            }
        }
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::TimeOutOfRange { time, duration } => {
                write!(f, "Requested time {} could not be mapped to any section of [0, {}]", time, duration)
            }
            QueryError::PhaseNotFound { time, duration } => {
                write!(f, "Section time {} could not be mapped to any phase of [0, {}]", time, duration)
            }
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<PathError> for Error {
    fn from(e: PathError) -> Self {
        Error::Path(e)
    }
}

impl From<QueryError> for Error {
    fn from(e: QueryError) -> Self {
        Error::Query(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for PathError {}

#[cfg(feature = "std")]
impl std::error::Error for QueryError {}

/// Copy a name into a fixed-capacity string, truncating at a char boundary if needed.
pub(crate) fn truncated_name<const N: usize>(name: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in name.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
