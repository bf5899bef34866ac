mod error;
mod loader;
pub mod types;
mod validate;

pub use error::ConfigError;
pub use loader::{load_config, parse_config};
pub use types::{FilterConfig, NormalizeConfig, ReportConfig, SlowlogConfig};
pub use validate::validate_config;
