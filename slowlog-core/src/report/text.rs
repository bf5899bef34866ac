use super::Report;
use crate::aggregate::QueryGroup;

const SPACER_WIDTH: usize = 80;

pub fn render_text(report: &Report<'_>) -> String {
    let spacer = "#".repeat(SPACER_WIDTH);
    let mut out = String::new();

    //-----------------------------------------------------------------------------
    // Banner
    //-----------------------------------------------------------------------------
    out.push_str(&format!(
        "{spacer}\n\
         \n\
         MySQL Slow Query Log Parser v {}\n\
         \n\
         {}\n\
         Output for {} ordered by {}\n\
         \n\
         {spacer}\n\
         \n",
        report.version,
        report.generated_at.format("%Y-%m-%d %H:%M:%S %z"),
        report.source,
        report.order_by,
    ));

    //-----------------------------------------------------------------------------
    // Groups
    //-----------------------------------------------------------------------------
    out.push('\n');
    for group in &report.groups {
        out.push_str(&spacer);
        out.push('\n');
        render_group(&mut out, group, report.detail_threshold);
    }

    //-----------------------------------------------------------------------------
    // Footer
    //-----------------------------------------------------------------------------
    let stats = report.stats;
    out.push_str(&spacer);
    out.push('\n');
    out.push_str(&format!(
        "{} queries in {} groups | filtered: {} | skipped lines: {} | malformed fields: {}\n",
        stats.records_emitted,
        report.groups.len(),
        stats.records_filtered,
        stats.noise_lines,
        stats.malformed_fields,
    ));
    if stats.truncated {
        out.push_str("warning: log ended in the middle of a record\n");
    }

    out
}

fn render_group(out: &mut String, group: &QueryGroup, detail_threshold: usize) {
    let representative = group.representative();

    out.push_str(&format!(
        "{} Queries\nuser: {}\nurl: {}\nip: {}\n",
        group.count(),
        representative.user,
        representative.host,
        representative.ip,
    ));

    if group.count() < detail_threshold {
        out.push_str(&format!(
            "Taking {} seconds to complete\n",
            join(&group.sorted_elapsed())
        ));
        out.push_str(&format!("Locking for {} seconds\n", join(&group.sorted_lock())));
    } else {
        out.push_str(&format!(
            "Taking {} to {} seconds to complete\n",
            group.min_elapsed(),
            group.max_elapsed()
        ));
        out.push_str(&format!(
            "Locking for {} to {} seconds\n",
            group.min_lock(),
            group.max_lock()
        ));
    }

    out.push_str(&format!(
        "Average time: {}, Median time {}\n",
        group.average_elapsed(),
        group.median_elapsed()
    ));
    out.push_str(&format!(
        "Average lock: {}, Median lock {}\n",
        group.average_lock(),
        group.median_lock()
    ));

    out.push('\n');
    out.push_str(group.signature());
    out.push('\n');
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
