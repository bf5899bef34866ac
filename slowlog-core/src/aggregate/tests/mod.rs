mod sort_tests;

use crate::log::QueryRecord;

pub(crate) fn record(sql: &str, elapsed: u64, lock: u64) -> QueryRecord {
    QueryRecord {
        sql: sql.to_string(),
        date: None,
        elapsed_seconds: elapsed,
        lock_seconds: lock,
        rows_sent: 1,
        rows_examined: 10,
        user: "app[app]".to_string(),
        host: "web-1".to_string(),
        ip: "[10.0.0.7]".to_string(),
    }
}
