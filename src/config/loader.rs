//! Load schedule specifications from YAML

use super::schema::ScheduleSpec;
use super::validate::validate_config;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load and validate a schedule specification from a YAML file
///
/// # Example
///
/// ```no_run
/// use recocido::config::load_config;
///
/// let spec = load_config("schedule.yaml")?;
/// println!("total steps: {}", spec.scheduler.total_steps);
/// # Ok::<(), recocido::Error>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<ScheduleSpec> {
    let yaml_content = fs::read_to_string(config_path.as_ref()).map_err(|e| {
        Error::ConfigError(format!(
            "Failed to read config file {}: {}",
            config_path.as_ref().display(),
            e
        ))
    })?;

    let spec = parse_config(&yaml_content)?;

    validate_config(&spec).map_err(|e| Error::ConfigError(format!("Invalid config: {e}")))?;

    Ok(spec)
}

/// Parse a schedule specification from YAML text without validating it
pub fn parse_config(yaml: &str) -> Result<ScheduleSpec> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))
}
