//! Report rendering
//!
//! Renders the sorted groups of a run as the classic text report, or as a
//! structured JSON/YAML document. Renderers return the full document as a
//! `String`; printing is up to the caller.

mod error;
mod structured;
mod text;

use crate::aggregate::QueryGroup;
use crate::log::ParseStats;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub use error::RenderError;
pub use structured::{render_json, render_yaml};
pub use text::render_text;

/// Groups with fewer members than this list every individual timing.
pub const DEFAULT_DETAIL_THRESHOLD: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Everything a renderer needs, borrowed from the finished run.
pub struct Report<'a> {
    pub version: &'a str,
    /// Log path as given by the user.
    pub source: &'a str,
    /// Ordering as requested by the user.
    pub order_by: &'a str,
    pub generated_at: DateTime<Local>,
    pub detail_threshold: usize,
    /// Already sorted.
    pub groups: Vec<&'a QueryGroup>,
    pub stats: &'a ParseStats,
}

pub fn render(report: &Report<'_>, format: ReportFormat) -> Result<String, RenderError> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => Ok(render_json(report)?),
        ReportFormat::Yaml => Ok(render_yaml(report)?),
    }
}
