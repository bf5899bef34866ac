use integration_tests::harness::{fixture_path, reference_day};
use pretty_assertions::assert_eq;
use slowlog_core::aggregate::{SortKey, sorted};
use slowlog_core::conf::SlowlogConfig;
use slowlog_core::log::ParseStats;
use slowlog_core::report::{Report, ReportFormat, render};
use slowlog_core::run::{RunOptions, run_file};

const ORDERS: &str = "SELECT * FROM orders WHERE customer_id = XXX AND status = XXX;";
const INVENTORY: &str = "UPDATE inventory\nSET reserved = XXX\nWHERE updated_at < XXX;";
const REVENUE: &str =
    "SELECT c.name, SUM(o.total) FROM customers c JOIN orders o ON o.customer_id = c.id\nGROUP BY c.name;";

fn options() -> RunOptions {
    RunOptions::from_config(&SlowlogConfig::default(), reference_day())
}

#[test]
fn fixture_log_is_grouped_by_signature() {
    // Act
    let outcome = run_file(&fixture_path("slow.log"), &options()).unwrap();

    // Assert
    assert_eq!(
        outcome.stats,
        ParseStats {
            records_emitted: 5,
            records_filtered: 1,
            noise_lines: 3,
            malformed_fields: 0,
            truncated: false,
        }
    );

    let signatures: Vec<&str> = outcome.groups.iter().map(|g| g.signature()).collect();
    assert_eq!(signatures, vec![ORDERS, INVENTORY, REVENUE]);

    let orders = &outcome.groups[0];
    assert_eq!(orders.count(), 3);
    assert_eq!(orders.sorted_elapsed(), vec![2, 4, 6]);
    assert_eq!(orders.average_elapsed(), 4);
    assert_eq!(orders.median_elapsed(), 4);
    assert_eq!(orders.max_lock(), 1);
    assert_eq!(orders.median_lock(), 0);
    assert_eq!(orders.representative().host, "web-1.internal");

    let revenue = &outcome.groups[2];
    assert_eq!(revenue.max_elapsed(), 3);
    assert_eq!(revenue.max_lock(), 0);
}

#[test]
fn use_line_and_dates_are_carried_on_members() {
    // Act
    let outcome = run_file(&fixture_path("slow.log"), &options()).unwrap();

    // Assert
    let members = outcome.groups[0].members();
    assert!(members[0].sql.starts_with("SELECT"));
    assert_eq!(members[0].date.map(|d| d.to_string()), Some("2024-06-18".into()));
    assert_eq!(members[2].date, None);
}

fn order_for(key: &str) -> Vec<String> {
    let outcome = run_file(&fixture_path("slow.log"), &options()).unwrap();
    sorted(&outcome.groups, SortKey::from_arg(Some(key)))
        .iter()
        .map(|g| g.signature().to_string())
        .collect()
}

#[test]
fn fixture_orderings() {
    assert_eq!(order_for("lock"), vec![REVENUE, ORDERS, INVENTORY]);
    assert_eq!(order_for("time"), vec![REVENUE, ORDERS, INVENTORY]);
    // count ties (1, 1) keep discovery order
    assert_eq!(order_for("number"), vec![INVENTORY, REVENUE, ORDERS]);
}

#[test]
fn text_report_renders_fixture() {
    // Arrange
    let outcome = run_file(&fixture_path("slow.log"), &options()).unwrap();
    let report = Report {
        version: "0.1.0",
        source: "slow.log",
        order_by: "time",
        generated_at: chrono::Local::now(),
        detail_threshold: 10,
        groups: sorted(&outcome.groups, SortKey::Time),
        stats: &outcome.stats,
    };

    // Act
    let out = render(&report, ReportFormat::Text).unwrap();

    // Assert
    let expected_orders = format!(
        "3 Queries\n\
         user: shop[shop]\n\
         url: web-1.internal\n\
         ip: [10.0.0.11]\n\
         Taking 2 4 6 seconds to complete\n\
         Locking for 0 0 1 seconds\n\
         Average time: 4, Median time 4\n\
         Average lock: 0, Median lock 0\n\
         \n\
         {ORDERS}\n"
    );
    assert!(out.contains(&expected_orders), "unexpected report:\n{out}");
    assert!(out.contains("5 queries in 3 groups | filtered: 1 | skipped lines: 3"));
}
