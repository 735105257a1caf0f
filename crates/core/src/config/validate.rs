use super::{types::Config, ConfigError};

/// Validate a loaded configuration before wiring the service.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::Invalid("server.port must be non-zero".into()));
    }

    if config.classifier.endpoint.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "classifier.endpoint must not be empty".into(),
        ));
    }

    if config.classifier.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "classifier.timeout_secs must be non-zero".into(),
        ));
    }

    Ok(())
}
