use chrono::NaiveDate;
use clap::Parser;
use slowlog_core::report::ReportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "slowlog",
    version,
    about = "Slowlog: MySQL slow query log digest"
)]
pub struct Cli {
    /// Path to the slow query log
    pub log_file: PathBuf,

    /// Ordering of the report: `lock`, `time`, anything else orders by count
    pub order_by: Option<String>,

    /// Path to an HCL config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Drop records older than this many days (overrides config)
    #[arg(long)]
    pub max_age_days: Option<u32>,

    /// Reference date for the age filter, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}
