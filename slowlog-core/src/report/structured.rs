use super::Report;
use crate::aggregate::GroupSummary;
use crate::log::ParseStats;
use serde::Serialize;

#[derive(Serialize)]
struct StructuredReport<'a> {
    version: &'a str,
    source: &'a str,
    order_by: &'a str,
    generated_at: String,
    stats: &'a ParseStats,
    groups: Vec<GroupSummary>,
}

impl<'a> StructuredReport<'a> {
    fn new(report: &'a Report<'a>) -> Self {
        Self {
            version: report.version,
            source: report.source,
            order_by: report.order_by,
            generated_at: report.generated_at.to_rfc3339(),
            stats: report.stats,
            groups: report.groups.iter().map(|g| g.summary()).collect(),
        }
    }
}

pub fn render_json(report: &Report<'_>) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(&StructuredReport::new(report))?;
    out.push('\n');
    Ok(out)
}

pub fn render_yaml(report: &Report<'_>) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(&StructuredReport::new(report))
}
