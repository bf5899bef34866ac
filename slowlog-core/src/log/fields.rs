use crate::log::constants::{
    ELAPSED_TOKEN, HOST_TOKEN, IP_TOKEN, LOCK_TOKEN, MARKER, ROWS_EXAMINED_TOKEN,
    ROWS_SENT_TOKEN, TIME_HEADER, USER_TOKEN,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn is_marker(line: &str) -> bool {
    line.starts_with(MARKER)
}

pub fn is_time_header(line: &str) -> bool {
    line.starts_with(TIME_HEADER)
}

/// Extracts the day code from a `# Time:` header.
///
/// Two layouts are understood:
/// - `# Time: 070606 10:02:03` (`%y%m%d`, MySQL 5.6 and older)
/// - `# Time: 2019-04-01T10:02:03.123456Z` (RFC 3339, MySQL 5.7+)
///
/// On failure the offending date text is returned.
pub fn parse_day_code(line: &str) -> Result<NaiveDate, String> {
    let value = line
        .strip_prefix(TIME_HEADER)
        .unwrap_or(line)
        .split_whitespace()
        .next()
        .unwrap_or_default();

    if value.len() == 6 && value.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(value, "%y%m%d").map_err(|_| value.to_string());
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Ok(ts.date_naive());
    }

    // Some servers omit the zone designator.
    if let Ok(ts) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ts.date());
    }

    Err(value.to_string())
}

/// Session metadata from the `# User@Host:` line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionInfo {
    pub user: String,
    pub host: String,
    pub ip: String,
}

impl SessionInfo {
    pub fn from_line(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let token = |i: usize| tokens.get(i).copied().unwrap_or_default().to_string();

        Self {
            user: token(USER_TOKEN),
            host: token(HOST_TOKEN),
            ip: token(IP_TOKEN),
        }
    }
}

/// A numeric token from the stats line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Parsed(u64),
    /// The token was missing or did not start with a digit; reads as zero.
    Coerced,
}

impl NumericField {
    /// Reads the leading run of ASCII digits, so fractional timings such as
    /// `2.731` truncate to whole seconds.
    pub fn parse(token: Option<&str>) -> Self {
        let Some(token) = token else {
            return NumericField::Coerced;
        };

        let digits = token.bytes().take_while(u8::is_ascii_digit).count();
        match token[..digits].parse::<u64>() {
            Ok(value) => NumericField::Parsed(value),
            Err(_) => NumericField::Coerced,
        }
    }

    pub fn value(self) -> u64 {
        match self {
            NumericField::Parsed(v) => v,
            NumericField::Coerced => 0,
        }
    }

    pub fn is_coerced(self) -> bool {
        matches!(self, NumericField::Coerced)
    }
}

/// The `# Query_time:` line, read positionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsLine {
    pub elapsed: NumericField,
    pub lock: NumericField,
    pub rows_sent: NumericField,
    pub rows_examined: NumericField,
}

impl StatsLine {
    pub fn from_line(line: &str) -> Self {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let field = |i: usize| NumericField::parse(tokens.get(i).copied());

        Self {
            elapsed: field(ELAPSED_TOKEN),
            lock: field(LOCK_TOKEN),
            rows_sent: field(ROWS_SENT_TOKEN),
            rows_examined: field(ROWS_EXAMINED_TOKEN),
        }
    }

    /// Number of fields that had to be coerced to zero.
    pub fn malformed(&self) -> u64 {
        [self.elapsed, self.lock, self.rows_sent, self.rows_examined]
            .iter()
            .filter(|f| f.is_coerced())
            .count() as u64
    }
}
