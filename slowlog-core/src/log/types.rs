use crate::log::constants::DEFAULT_MAX_AGE_DAYS;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One parsed slow log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    /// Query body, physical lines joined with `\n`.
    pub sql: String,
    /// `None` when the entry had no `# Time:` header.
    pub date: Option<NaiveDate>,
    pub elapsed_seconds: u64,
    pub lock_seconds: u64,
    pub rows_sent: u64,
    pub rows_examined: u64,
    pub user: String,
    pub host: String,
    pub ip: String,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Reference date for the age filter.
    pub today: NaiveDate,
    pub max_age_days: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            today: Local::now().date_naive(),
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

/// Counters for everything the parser recovered from or dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub records_emitted: u64,
    /// Records dropped for being older than the age limit.
    pub records_filtered: u64,
    /// Lines outside any record that were skipped.
    pub noise_lines: u64,
    /// Stats tokens coerced to zero.
    pub malformed_fields: u64,
    /// Input ended in the middle of a record header.
    pub truncated: bool,
}
