use crate::conf::error::ConfigError;
use crate::conf::types::SlowlogConfig;
use crate::normalize::is_valid_placeholder;

pub fn validate_config(config: &SlowlogConfig) -> Result<(), ConfigError> {
    if !is_valid_placeholder(&config.normalize.placeholder) {
        return Err(ConfigError::InvalidPlaceholder {
            placeholder: config.normalize.placeholder.clone(),
        });
    }

    if config.report.detail_threshold == 0 {
        return Err(ConfigError::InvalidDetailThreshold);
    }

    Ok(())
}
