use crate::log::DEFAULT_MAX_AGE_DAYS;
use crate::normalize::DEFAULT_PLACEHOLDER;
use crate::report::{DEFAULT_DETAIL_THRESHOLD, ReportFormat};
use serde::{Deserialize, Serialize};

/// Contents of `slowlog.hcl`. Every block and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SlowlogConfig {
    pub filter: FilterConfig,
    pub normalize: NormalizeConfig,
    pub report: ReportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Records older than this many days are left out of the report.
    pub max_age_days: u32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_age_days: DEFAULT_MAX_AGE_DAYS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizeConfig {
    pub placeholder: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Groups with fewer members list every timing; larger groups show a range.
    pub detail_threshold: usize,
    pub format: ReportFormat,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            detail_threshold: DEFAULT_DETAIL_THRESHOLD,
            format: ReportFormat::Text,
        }
    }
}
