use crate::conf::error::ConfigError;
use crate::conf::types::SlowlogConfig;
use crate::conf::validate::validate_config;
use std::fs;
use std::path::Path;

pub fn load_config(path: &Path) -> Result<SlowlogConfig, ConfigError> {
    //--------------------------------------------------------------------------
    // Hard fail: IO
    //--------------------------------------------------------------------------
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;

    let config = parse_config(&contents).map_err(|e| ConfigError::parse(path, e))?;

    validate_config(&config)?;

    tracing::debug!(path = %path.display(), "config loaded");

    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<SlowlogConfig, hcl::Error> {
    hcl::from_str(contents)
}
