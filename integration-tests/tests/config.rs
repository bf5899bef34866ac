use integration_tests::harness::{fixture_path, reference_day};
use serde_json::Value;
use slowlog_core::aggregate::{SortKey, sorted};
use slowlog_core::conf::load_config;
use slowlog_core::report::{Report, ReportFormat, render};
use slowlog_core::run::{RunOptions, run_file};

#[test]
fn fixture_config_changes_filter_and_placeholder() {
    // Arrange
    let config = load_config(&fixture_path("slowlog.hcl")).unwrap();
    let options = RunOptions::from_config(&config, reference_day());

    // Act
    let outcome = run_file(&fixture_path("slow.log"), &options).unwrap();

    // Assert
    assert_eq!(outcome.stats.records_filtered, 0);
    assert_eq!(outcome.stats.records_emitted, 6);
    assert!(
        outcome
            .groups
            .iter()
            .any(|g| g.signature() == "SELECT SLEEP(?);")
    );
    assert_eq!(
        outcome.groups[0].signature(),
        "SELECT * FROM orders WHERE customer_id = ? AND status = ?;"
    );
}

#[test]
fn fixture_config_selects_json_report() {
    // Arrange
    let config = load_config(&fixture_path("slowlog.hcl")).unwrap();
    let options = RunOptions::from_config(&config, reference_day());
    let outcome = run_file(&fixture_path("slow.log"), &options).unwrap();
    let report = Report {
        version: "0.1.0",
        source: "slow.log",
        order_by: "lock",
        generated_at: chrono::Local::now(),
        detail_threshold: config.report.detail_threshold,
        groups: sorted(&outcome.groups, SortKey::Lock),
        stats: &outcome.stats,
    };

    // Act
    assert_eq!(config.report.format, ReportFormat::Json);
    let out = render(&report, config.report.format).unwrap();
    let doc: Value = serde_json::from_str(&out).unwrap();

    // Assert
    let groups = doc["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 4);
    let last = groups.last().unwrap();
    assert_eq!(last["signature"], "SELECT SLEEP(?);");
    assert_eq!(last["max_lock"], 50);
}
