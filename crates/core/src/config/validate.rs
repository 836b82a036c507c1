use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Capacities are non-zero
/// - The data file path is not empty
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.library.max_games == 0 {
        return Err(ConfigError::ValidationError(
            "library.max_games cannot be 0".to_string(),
        ));
    }
    if config.library.max_members == 0 {
        return Err(ConfigError::ValidationError(
            "library.max_members cannot be 0".to_string(),
        ));
    }
    if config.library.data_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "library.data_file cannot be empty".to_string(),
        ));
    }

    Ok(())
}
