mod cli;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::Cli;
use slowlog_core::aggregate::{SortKey, sorted};
use slowlog_core::conf::{SlowlogConfig, load_config};
use slowlog_core::logging::init_logging;
use slowlog_core::report::{Report, render};
use slowlog_core::run::{RunOptions, run_file};

fn main() {
    let cli = Cli::parse();

    init_logging();
    tracing::debug!(?cli, "parsed arguments");

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("slowlog error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SlowlogConfig::default(),
    };

    if let Some(days) = cli.max_age_days {
        config.filter.max_age_days = days;
    }
    if let Some(format) = cli.format {
        config.report.format = format;
    }

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let options = RunOptions::from_config(&config, today);

    let outcome = run_file(&cli.log_file, &options)?;

    let key = SortKey::from_arg(cli.order_by.as_deref());
    let source = cli.log_file.display().to_string();
    let report = Report {
        version: env!("CARGO_PKG_VERSION"),
        source: &source,
        order_by: cli.order_by.as_deref().unwrap_or(key.as_str()),
        generated_at: Local::now(),
        detail_threshold: config.report.detail_threshold,
        groups: sorted(&outcome.groups, key),
        stats: &outcome.stats,
    };

    render(&report, config.report.format).context("failed to render report")
}
