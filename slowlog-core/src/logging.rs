use std::io::{self, IsTerminal};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable that forces the diagnostic log format (`json` or `pretty`).
pub const LOG_FORMAT_ENV: &str = "SLOWLOG_LOG_FORMAT";

/// Initialize the logging system with environment-based filtering.
///
/// Diagnostics always go to stderr: stdout is reserved for the report.
/// - Uses `RUST_LOG` for level filtering (defaults to "warn" if not set)
/// - JSON output with flattened event fields when stderr is not a terminal
/// - Compact human-readable output otherwise
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match default_log_format() {
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .flatten_event(true)
            .init(),
        LogFormat::Pretty => fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init(),
    }
}

pub fn default_log_format() -> LogFormat {
    if let Some(format) = std::env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|v| LogFormat::from_name(&v))
    {
        return format;
    }

    if io::stderr().is_terminal() {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

impl LogFormat {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "pretty" => Some(LogFormat::Pretty),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogFormat;

    #[test]
    fn log_format_names_are_case_insensitive() {
        assert_eq!(LogFormat::from_name("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_name(" pretty "), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::from_name("yaml"), None);
    }
}
