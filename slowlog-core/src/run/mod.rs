//! Run driver
//!
//! Owns the state of one digest run: it opens the log, drives the
//! [`RecordParser`] into an [`Aggregator`] and hands back the finished
//! groups. Nothing is global, so independent runs can share a process.

mod error;

pub use error::RunError;

use crate::aggregate::{Aggregator, QueryGroup};
use crate::conf::SlowlogConfig;
use crate::log::{ParseError, ParseOptions, ParseStats, RecordParser};
use crate::normalize::Normalizer;
use chrono::NaiveDate;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Settings for one run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub parse: ParseOptions,
    pub placeholder: String,
}

impl RunOptions {
    pub fn from_config(config: &SlowlogConfig, today: NaiveDate) -> Self {
        Self {
            parse: ParseOptions {
                today,
                max_age_days: config.filter.max_age_days,
            },
            placeholder: config.normalize.placeholder.clone(),
        }
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::from_config(&SlowlogConfig::default(), ParseOptions::default().today)
    }
}

/// Finished run: groups in discovery order plus parser counters.
#[derive(Debug)]
pub struct RunOutcome {
    pub groups: Vec<QueryGroup>,
    pub stats: ParseStats,
}

pub fn run_file(path: &Path, options: &RunOptions) -> Result<RunOutcome, RunError> {
    let file = File::open(path).map_err(|source| RunError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), "digesting slow query log");

    Ok(digest(BufReader::new(file), options)?)
}

/// Parses and aggregates a whole log from any reader.
pub fn digest<R: BufRead>(reader: R, options: &RunOptions) -> Result<RunOutcome, ParseError> {
    let mut parser = RecordParser::new(reader, options.parse.clone());
    let mut aggregator = Aggregator::new(Normalizer::new(options.placeholder.as_str()));

    for record in parser.by_ref() {
        aggregator.add_record(record?);
    }

    let stats = parser.into_stats();

    tracing::info!(
        records = stats.records_emitted,
        groups = aggregator.len(),
        filtered = stats.records_filtered,
        noise_lines = stats.noise_lines,
        malformed_fields = stats.malformed_fields,
        truncated = stats.truncated,
        "digest complete"
    );

    Ok(RunOutcome {
        groups: aggregator.into_groups(),
        stats,
    })
}
