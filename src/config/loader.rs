//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{ConfigError, Error, Result};

use super::SystemConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use sync_motion::{load_config, Trajectory};
///
/// let config = load_config("pick_and_place.toml")?;
/// let trajectory = Trajectory::from_config(&config)?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SystemConfig> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        let msg = heapless::String::try_from(e.to_string().as_str()).unwrap_or_default();
        Error::Config(ConfigError::IoError(msg))
    })?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SystemConfig> {
    let config: SystemConfig = toml::from_str(content).map_err(|e| {
        let msg = heapless::String::try_from(e.message()).unwrap_or_default();
        Error::Config(ConfigError::ParseError(msg))
    })?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Solver;
    use crate::PathError;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[groups.pos]
components = ["x"]

[[waypoints]]
name = "start"
groups.pos = { value = [0.0], max_velocity = 1.0, max_acceleration = 1.0 }

[[waypoints]]
name = "end"
groups.pos = { value = [1.0], max_velocity = 1.0, max_acceleration = 1.0 }
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.solver, Solver::ConstantAcceleration);
        assert!(config.group("pos").is_some());
        assert_eq!(config.waypoints.len(), 2);
    }

    #[test]
    fn test_parse_rotational_group() {
        let toml = r#"
solver = "constant_acceleration"

[groups.pos]
components = ["x", "y", "z"]

[groups.rot]
rotational = true

[[waypoints]]
name = "p1"
groups.pos = { value = [0.0, 0.0, 0.0], max_velocity = 1.0, max_acceleration = 1.0 }
groups.rot = { value = [1.0, 0.0, 0.0, 0.0], max_velocity = 0.5, max_acceleration = 0.5 }

[[waypoints]]
name = "p2"
groups.pos = { value = [1.0, 2.0, 0.0], max_velocity = 1.0, max_acceleration = 1.0 }
groups.rot = { value = [0.0, 0.0, 0.0, 1.0], max_velocity = 0.5, max_acceleration = 0.5 }
"#;

        let config = parse_config(toml).unwrap();
        let schema = config.schema().unwrap();
        assert!(schema.get(1).unwrap().is_rotational());
        assert_eq!(config.waypoint("p2").unwrap().group("rot").unwrap().max_velocity, 0.5);
    }

    #[test]
    fn test_zero_quaternion_rejected() {
        let toml = r#"
[groups.rot]
rotational = true

[[waypoints]]
name = "p1"
groups.rot = { value = [1.0, 0.0, 0.0, 0.0], max_velocity = 1.0, max_acceleration = 1.0 }

[[waypoints]]
name = "p2"
groups.rot = { value = [0.0, 0.0, 0.0, 0.0], max_velocity = 1.0, max_acceleration = 1.0 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::InvalidOrientation(_)))
        ));
    }

    #[test]
    fn test_non_finite_value_rejected() {
        let toml = r#"
[groups.pos]
components = ["x", "y"]

[[waypoints]]
name = "p1"
groups.pos = { value = [0.0, 0.0], max_velocity = 1.0, max_acceleration = 1.0 }

[[waypoints]]
name = "p2"
groups.pos = { value = [nan, inf], max_velocity = 1.0, max_acceleration = 1.0 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::NonFiniteValue(ref g))) if g.as_str() == "pos"
        ));
    }

    #[test]
    fn test_missing_group_rejected() {
        let toml = r#"
[groups.pos]
components = ["x"]

[groups.tool]
components = ["grip"]

[[waypoints]]
name = "p1"
groups.pos = { value = [0.0], max_velocity = 1.0, max_acceleration = 1.0 }
groups.tool = { value = [0.0], max_velocity = 1.0, max_acceleration = 1.0 }

[[waypoints]]
name = "p2"
groups.pos = { value = [1.0], max_velocity = 1.0, max_acceleration = 1.0 }
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Path(PathError::SchemaMismatch { .. }))
        ));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(
            parse_config("groups = ["),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/motion.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
